use clap::{Parser, Subcommand};

mod args;
mod parsers;


pub use args::{ColumnsArgs, RenderArgs};

#[derive(Debug, Parser)]
#[command(name = "querykit")]
#[command(about = "Query-string rendering toolkit", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge operation tokens into a base query state and print the encoded string.
    Render(RenderArgs),
    /// Distribute a JSON array into display columns.
    Columns(ColumnsArgs),
}
