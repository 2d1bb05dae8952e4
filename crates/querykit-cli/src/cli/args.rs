use std::path::PathBuf;

use clap::Args;

use super::parsers::parse_min_one_usize;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Operation tokens: `name=value`, `name[]+=value`, `name-=value`,
    /// `name=None`, or the bare `append` keyword.
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,

    /// Base query state as a JSON object; `-` reads stdin.
    #[arg(long, default_value = "-")]
    pub state: String,

    /// JSON object supplying values for reference tokens.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Lead with `&` instead of `?`.
    #[arg(long, default_value_t = false)]
    pub append: bool,

    /// On failure, print a structured error payload to stderr.
    #[arg(long, default_value_t = false)]
    pub diagnose: bool,
}

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Source list as a JSON array; `-` reads stdin.
    #[arg(long, default_value = "-")]
    pub source: String,

    /// Number of columns to distribute into.
    #[arg(long = "into", value_name = "COLUMNS", value_parser = parse_min_one_usize)]
    pub columns: usize,

    /// Keep source order, breaking it into consecutive runs.
    #[arg(long, default_value_t = false)]
    pub stacked: bool,
}
