use std::io::Read;
use std::{fs, io};

use anyhow::{Context, Result, bail};
use querykit_core::columns::{Layout, columnize};
use querykit_core::{
    EmptyResolver, JsonResolver, Leading, QueryError, QueryState, QueryTag, Resolver,
};
use serde_json::Value;

use crate::cli::{ColumnsArgs, Commands, RenderArgs};
use crate::config::CliConfig;


pub(crate) fn run(command: Commands) -> Result<()> {
    let config = CliConfig::from_env();
    match command {
        Commands::Render(args) => {
            println!("{}", render_output(&config, &args)?);
        }
        Commands::Columns(args) => {
            println!("{}", columns_output(&args)?);
        }
    }
    Ok(())
}

fn render_output(config: &CliConfig, args: &RenderArgs) -> Result<String> {
    let raw_state = read_source(&args.state).context("failed to read base state")?;
    let state = QueryState::from_json_str(&raw_state)
        .map_err(|err| surface(err, "render", args.diagnose))?;

    let tag = QueryTag::parse(args.tokens.iter().map(String::as_str))
        .map_err(|err| surface(err, "render", args.diagnose))?;

    let context_path = args.context.as_deref().or(config.context_path.as_deref());
    let resolver: Box<dyn Resolver> = match context_path {
        Some(path) => Box::new(
            JsonResolver::load(path).map_err(|err| surface(err, "render", args.diagnose))?,
        ),
        None => Box::new(EmptyResolver),
    };

    let append = args.append || tag.append() || config.append_default;
    Ok(tag.render_with(&state, resolver.as_ref(), Leading::from_append(append)))
}

fn columns_output(args: &ColumnsArgs) -> Result<String> {
    let raw = read_source(&args.source).context("failed to read source list")?;
    let parsed: Value = serde_json::from_str(&raw).context("source list is not valid JSON")?;
    let Value::Array(items) = parsed else {
        bail!("source list must be a JSON array");
    };

    let layout = if args.stacked {
        Layout::Stacked
    } else {
        Layout::Alternating
    };
    let distributed = columnize(&items, args.columns, layout);
    serde_json::to_string(&distributed).context("failed to encode column output")
}

/// On `--diagnose`, emit the structured payload before handing the error up.
fn surface(err: QueryError, operation: &str, diagnose: bool) -> anyhow::Error {
    if diagnose {
        if let Ok(payload) = serde_json::to_string_pretty(&err.to_payload(operation)) {
            eprintln!("{payload}");
        }
    }
    err.into()
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(source).with_context(|| format!("failed to read `{source}`"))
}
