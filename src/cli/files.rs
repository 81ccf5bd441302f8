//! Files command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::source::SourceArgs;

#[derive(Args)]
pub struct FilesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: FilesArgs, settings: Option<&Path>) -> Result<()> {
    let config = args.source.load(settings)?;

    println!("Origin: {}", config.origin());
    if let Some(dir) = config.source_directory() {
        println!("Directory: {}", dir.display());
    }
    println!("Files: {}", config.loaded_files().len());
    for file in config.loaded_files() {
        println!("  {}", file.display());
    }
    Ok(())
}
