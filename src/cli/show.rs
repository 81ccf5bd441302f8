//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::source::SourceArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print; duplicate keys collapse to their last value
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ShowArgs, settings: Option<&Path>) -> Result<()> {
    let config = args.source.load(settings)?;
    if args.pretty {
        let value: serde_json::Value = config.decode()?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", config);
    }
    Ok(())
}
