use crate::encode;
use crate::state::QueryState;
use crate::value::QueryValue;

/// Leading separator of a rendered query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Leading {
    #[default]
    Question,
    Ampersand,
}

impl Leading {
    #[must_use]
    pub const fn from_append(append: bool) -> Self {
        if append {
            Self::Ampersand
        } else {
            Self::Question
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Question => '?',
            Self::Ampersand => '&',
        }
    }
}

/// Render a state to its canonical encoded form. The empty state is the one
/// case with no leading separator: it renders as the empty string.
#[must_use]
pub fn serialize(state: &QueryState, leading: Leading) -> String {
    if state.is_empty() {
        return String::new();
    }

    let mut pairs: Vec<(String, String)> = Vec::with_capacity(state.len());
    for (key, value) in state.iter() {
        match value {
            QueryValue::Scalar(scalar) => pairs.push((key.to_string(), scalar.clone())),
            QueryValue::List(items) => {
                // stored keys may already carry a bracket suffix; strip any
                // trailing bracket characters before re-adding exactly one
                let key = format!("{}[]", key.trim_end_matches(['[', ']']));
                for item in items {
                    pairs.push((key.clone(), item.clone()));
                }
            }
        }
    }

    let encoded = encode::encode_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    format!("{}{}", leading.as_char(), encoded)
}
