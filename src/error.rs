//! Error types for configuration loading and decoding

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Broad category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Pattern,
    Format,
    Decode,
    Settings,
}

/// Errors raised while building or decoding a [`crate::Config`].
///
/// `Io`, `Pattern` and `Format` abort construction; no handle is returned.
/// `Decode` leaves the handle intact so the caller can retry with another
/// target type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Merged configuration is not valid JSON: {source}")]
    Format {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration does not match the target type: {source}")]
    Decode {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Pattern { .. } => ErrorKind::Pattern,
            Self::Format { .. } => ErrorKind::Format,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Settings { .. } => ErrorKind::Settings,
        }
    }

    /// The merged text that failed to parse or decode, for diagnostics.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Format { text, .. } | Self::Decode { text, .. } => Some(text),
            _ => None,
        }
    }
}
