use std::path::PathBuf;

/// Environment-supplied defaults. Flags always win over the environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct CliConfig {
    /// `QUERYKIT_APPEND`: lead rendered output with `&` by default.
    pub(crate) append_default: bool,
    /// `QUERYKIT_CONTEXT`: context JSON path used when `--context` is absent.
    pub(crate) context_path: Option<PathBuf>,
}

impl CliConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            append_default: read_env_flag("QUERYKIT_APPEND"),
            context_path: read_non_empty_env("QUERYKIT_CONTEXT").map(PathBuf::from),
        }
    }
}

fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_env_flag(name: &str) -> bool {
    read_non_empty_env(name)
        .is_some_and(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}
