//! Get command implementation

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::Path;

use super::source::SourceArgs;

#[derive(Args)]
pub struct GetArgs {
    /// JSON Pointer (RFC 6901), e.g. /server/port
    #[arg(value_name = "POINTER")]
    pub pointer: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: GetArgs, settings: Option<&Path>) -> Result<()> {
    let config = args.source.load(settings)?;
    let root: Value = config.decode()?;

    let Some(value) = root.pointer(&args.pointer) else {
        anyhow::bail!("No value at pointer '{}'", args.pointer);
    };
    match value {
        // Strings print bare so the output can be used directly in scripts.
        Value::String(s) => println!("{}", s),
        other => println!("{}", other),
    }
    Ok(())
}
