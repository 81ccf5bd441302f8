//! Source selection and loader flags shared by every subcommand.

use anyhow::{Context, Result};
use clap::Args;
use fragconf::settings::load_settings;
use fragconf::{Config, ConfigLoader, LoaderOptions};
use std::path::{Path, PathBuf};

/// Exactly one configuration source.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Inline object body, e.g. '"port": 8080'
    #[arg(long, value_name = "BODY")]
    pub data: Option<String>,

    /// Config file to merge; repeat to merge several in order
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Glob pattern selecting config files
    #[arg(long, value_name = "PATTERN")]
    pub glob: Option<String>,

    /// Directory whose files are merged in name order
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    #[command(flatten)]
    pub source: Source,

    /// Skip files whose name starts with this character
    #[arg(long, value_name = "CHAR")]
    pub ignore_prefix: Option<char>,

    /// Strip from this character to the end of each line
    #[arg(long, value_name = "CHAR")]
    pub comment_marker: Option<char>,

    /// Number of read threads (0 uses the global pool)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl SourceArgs {
    /// Settings file values, overridden by any flags given.
    pub fn options(&self, settings: Option<&Path>) -> Result<LoaderOptions> {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        let mut options = load_settings(&cwd, settings)?;
        if let Some(prefix) = self.ignore_prefix {
            options = options.ignore_prefix(prefix);
        }
        if let Some(marker) = self.comment_marker {
            options = options.comment_marker(marker);
        }
        if self.threads.is_some() {
            options = options.threads(self.threads);
        }
        Ok(options)
    }

    pub fn load(&self, settings: Option<&Path>) -> Result<Config> {
        let loader = ConfigLoader::new(self.options(settings)?);
        let source = &self.source;

        let config = if let Some(body) = &source.data {
            loader.data(body).context("Failed to parse inline data")?
        } else if let Some(pattern) = &source.glob {
            loader.glob(pattern).with_context(|| format!("Failed to load glob {}", pattern))?
        } else if let Some(dir) = &source.dir {
            loader.dir(dir).with_context(|| format!("Failed to load directory {}", dir.display()))?
        } else {
            loader.files(source.files.iter()).context("Failed to load config files")?
        };
        Ok(config)
    }
}
