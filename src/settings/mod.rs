//! Loader settings file for the command-line tool
//!
//! Settings are read from an explicit path or discovered in the working
//! directory. A `[fragconf]` table is used when present, otherwise the
//! top-level table.

use crate::error::{ConfigError, Result};
use crate::options::LoaderOptions;
use std::fs;
use std::path::{Path, PathBuf};

const CANDIDATES: &[&str] = &["fragconf.toml", ".fragconf.toml"];

/// Load [`LoaderOptions`] for a run rooted at `cwd`.
///
/// An explicit `settings_path` must exist and parse. A discovered file that
/// fails to parse is reported with a warning and defaults are used instead.
pub fn load_settings(cwd: &Path, settings_path: Option<&Path>) -> Result<LoaderOptions> {
    let explicit = settings_path.is_some();
    let discovered = match settings_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(cwd),
    };

    let Some(file) = discovered else {
        return Ok(LoaderOptions::default());
    };

    let content = fs::read_to_string(&file).map_err(|e| ConfigError::io(&file, e))?;
    match parse_settings(&content, &file) {
        Ok(options) => {
            tracing::debug!(path = %file.display(), "Loaded fragconf settings");
            Ok(options)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered settings {}: {}", file.display(), e);
            Ok(LoaderOptions::default())
        }
    }
}

fn parse_settings(content: &str, file: &Path) -> Result<LoaderOptions> {
    let invalid = |message: String| ConfigError::Settings { path: file.to_path_buf(), message };

    let raw: toml::Value = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let section = match raw.get("fragconf") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    section.try_into().map_err(|e: toml::de::Error| invalid(e.to_string()))
}

fn discover_settings(cwd: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|name| cwd.join(name)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let opts = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(opts, LoaderOptions::default());
    }

    #[test]
    fn discovers_top_level_table() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("fragconf.toml"), "ignore_prefix = '_'\nthreads = 2\n")
            .expect("write");

        let opts = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(opts.ignore_prefix, '_');
        assert_eq!(opts.threads, Some(2));
        assert_eq!(opts.comment_marker, '#');
    }

    #[test]
    fn nested_section_is_preferred() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tool.toml");
        fs::write(&path, "[fragconf]\ncomment_marker = ';'\n").expect("write");

        let opts = load_settings(tmp.path(), Some(&path)).expect("settings");
        assert_eq!(opts.comment_marker, ';');
    }

    #[test]
    fn explicit_invalid_settings_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "comment_marker = 'too long'\n").expect("write");

        let err = load_settings(tmp.path(), Some(&path)).expect_err("bad settings");
        assert_eq!(err.kind(), ErrorKind::Settings);
    }

    #[test]
    fn explicit_missing_settings_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_settings(tmp.path(), Some(&tmp.path().join("absent.toml")))
            .expect_err("missing settings");
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn discovered_invalid_settings_falls_back() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".fragconf.toml"), "unknown_key = 1\n").expect("write");

        let opts = load_settings(tmp.path(), None).expect("settings");
        assert_eq!(opts, LoaderOptions::default());
    }
}
