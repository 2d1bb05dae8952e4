#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpMode {
    #[default]
    Set,
    Append,
    Remove,
}

/// Outcome of resolving an operation's value reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Present(String),
    /// The reference could not be resolved; the operation contributes nothing.
    Absent,
    /// An explicit unset request: delete the key whatever its shape.
    Unset,
}

/// A single named edit against a query state. The mode is decided once, at
/// the adapter boundary; the merge loop never re-parses marker text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub key: String,
    pub mode: OpMode,
    pub resolved: Resolved,
}

impl Operation {
    pub fn new(key: impl Into<String>, mode: OpMode, resolved: Resolved) -> Self {
        Self {
            key: key.into(),
            mode,
            resolved,
        }
    }

    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, OpMode::Set, Resolved::Present(value.into()))
    }

    pub fn append(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, OpMode::Append, Resolved::Present(value.into()))
    }

    pub fn remove(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, OpMode::Remove, Resolved::Present(value.into()))
    }

    pub fn unset(key: impl Into<String>) -> Self {
        Self::new(key, OpMode::Set, Resolved::Unset)
    }

    pub fn absent(key: impl Into<String>) -> Self {
        Self::new(key, OpMode::Set, Resolved::Absent)
    }
}

/// Split the trailing `+`/`-` marker off an operation name. At most one
/// marker is recognized; the remainder is the lookup key.
#[must_use]
pub fn split_marker(name: &str) -> (&str, OpMode) {
    if let Some(key) = name.strip_suffix('+') {
        (key, OpMode::Append)
    } else if let Some(key) = name.strip_suffix('-') {
        (key, OpMode::Remove)
    } else {
        (name, OpMode::Set)
    }
}
