use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

/// Empty, `"0"`, and boolean-false text count as "no value given" for the
/// set-suppression rule. Everything else, including `"0.0"`, is a real value.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Textual form of a JSON scalar. Arrays, objects, and null have no
/// query-value rendition and yield `None`.
#[must_use]
pub(crate) fn scalar_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
