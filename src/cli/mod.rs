//! Command-line interface for fragconf
//!
//! Provides `show`, `files` and `get` subcommands over a single config source.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod files;
mod get;
mod show;
mod source;

/// Merge comment-stripped JSON configuration fragments
#[derive(Parser)]
#[command(name = "fragconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Loader settings file (TOML); defaults to ./fragconf.toml when present
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration as JSON
    Show(show::ShowArgs),

    /// List the files that make up the merged configuration
    Files(files::FilesArgs),

    /// Print the value at a JSON Pointer inside the merged configuration
    Get(get::GetArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Show(args) => show::run(args, settings),
        Commands::Files(args) => files::run(args, settings),
        Commands::Get(args) => get::run(args, settings),
    }
}
