use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::value::{self, QueryValue};

/// Insertion-ordered key/value mapping behind a query string. Iteration order
/// is the order keys were first added, which makes serialization reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    entries: Vec<(String, QueryValue)>,
}

impl QueryState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, QueryValue)>,
    {
        let mut state = Self::new();
        for (key, value) in pairs {
            state.insert(key, value);
        }
        state
    }

    /// Decode a base state from JSON. Anything other than an object degrades
    /// to the empty state; null and nested-object member values are skipped.
    #[must_use]
    pub fn from_json(input: &Value) -> Self {
        let Value::Object(map) = input else {
            return Self::new();
        };

        let mut state = Self::new();
        for (key, raw) in map {
            if let Value::Array(items) = raw {
                let values: Vec<String> =
                    items.iter().filter_map(value::scalar_from_json).collect();
                state.insert(key.clone(), QueryValue::List(values));
            } else if let Some(scalar) = value::scalar_from_json(raw) {
                state.insert(key.clone(), QueryValue::Scalar(scalar));
            }
        }
        state
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(raw)?;
        Ok(Self::from_json(&parsed))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Replaces in place when the key exists (keeping its position), appends
    /// otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(index).1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
