use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::value;

/// Outcome of looking a reference up in the caller's context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Value(String),
    /// The reference exists and is explicitly null: an unset request.
    Null,
    /// The reference does not resolve to a usable value.
    Missing,
}

/// External collaborator that turns operation value references into concrete
/// strings. The engine never evaluates expressions itself.
pub trait Resolver {
    fn resolve(&self, name: &str) -> Resolution;
}

/// Resolves references against a JSON object. A non-object context resolves
/// nothing, matching the degrade-to-no-op policy for malformed input.
#[derive(Debug, Clone, Default)]
pub struct JsonResolver {
    context: Value,
}

impl JsonResolver {
    #[must_use]
    pub const fn new(context: Value) -> Self {
        Self { context }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl Resolver for JsonResolver {
    fn resolve(&self, name: &str) -> Resolution {
        match self.context.get(name) {
            None => Resolution::Missing,
            Some(Value::Null) => Resolution::Null,
            Some(raw) => value::scalar_from_json(raw).map_or(Resolution::Missing, Resolution::Value),
        }
    }
}

/// Context-free resolver: every reference is missing. Renders with literal
/// values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyResolver;

impl Resolver for EmptyResolver {
    fn resolve(&self, _name: &str) -> Resolution {
        Resolution::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_resolver_distinguishes_missing_null_and_value() {
        let resolver = JsonResolver::new(json!({
            "title": "Some Title",
            "count": 30,
            "cleared": null
        }));

        assert_eq!(
            resolver.resolve("title"),
            Resolution::Value("Some Title".to_string())
        );
        assert_eq!(resolver.resolve("count"), Resolution::Value("30".to_string()));
        assert_eq!(resolver.resolve("cleared"), Resolution::Null);
        assert_eq!(resolver.resolve("ghost"), Resolution::Missing);
    }

    #[test]
    fn non_scalar_references_are_missing() {
        let resolver = JsonResolver::new(json!({"items": [1, 2], "meta": {"a": 1}}));
        assert_eq!(resolver.resolve("items"), Resolution::Missing);
        assert_eq!(resolver.resolve("meta"), Resolution::Missing);
    }

    #[test]
    fn non_object_context_resolves_nothing() {
        let resolver = JsonResolver::new(json!("not an object"));
        assert_eq!(resolver.resolve("title"), Resolution::Missing);
    }

    #[test]
    fn empty_resolver_misses_everything() {
        assert_eq!(EmptyResolver.resolve("anything"), Resolution::Missing);
    }
}
