//! The merged configuration handle and its constructors

use crate::error::{ConfigError, Result};
use crate::loader::load_fragments;
use crate::merge::merge_fragments;
use crate::options::LoaderOptions;
use crate::source::{directory_files, explicit_files, glob_files};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a [`Config`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    InlineData,
    FileList,
    Directory,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::InlineData => "data",
            Origin::FileList => "files",
            Origin::Directory => "directory",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, merged JSON configuration object.
///
/// The merged text is always a valid, compacted JSON object. `loaded_files`
/// lists the files in the order their fragments were concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    origin: Origin,
    data: String,
    directory: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl Config {
    /// Treat `body` as the inside of a JSON object literal.
    pub fn from_data(body: &str) -> Result<Self> {
        ConfigLoader::default().data(body)
    }

    pub fn from_files<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ConfigLoader::default().files(paths)
    }

    pub fn from_glob(pattern: &str) -> Result<Self> {
        ConfigLoader::default().glob(pattern)
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::default().dir(dir)
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    pub fn text(&self) -> &str {
        &self.data
    }

    /// Only set for directory scans.
    pub fn source_directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Decode the merged object into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.data).map_err(|source| {
            tracing::debug!(json = %self.data, "Config does not match target type");
            ConfigError::Decode { text: self.data.clone(), source }
        })
    }

    /// Decode into an existing value, returning `self` for chaining.
    ///
    /// `target` is only overwritten when decoding succeeds.
    pub fn decode_into<T: DeserializeOwned>(&self, target: &mut T) -> Result<&Self> {
        *target = self.decode()?;
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl AsRef<[u8]> for Config {
    fn as_ref(&self) -> &[u8] {
        self.bytes()
    }
}

/// Builds [`Config`] values with explicit [`LoaderOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Inline data skips enumeration and comment stripping.
    pub fn data(&self, body: &str) -> Result<Config> {
        let data = merge_fragments(&[body])?;
        Ok(Config { origin: Origin::InlineData, data, directory: None, files: Vec::new() })
    }

    pub fn files<I, P>(&self, paths: I) -> Result<Config>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let files = explicit_files(paths, &self.options);
        self.load(Origin::FileList, None, files)
    }

    pub fn glob(&self, pattern: &str) -> Result<Config> {
        let files = glob_files(pattern, &self.options)?;
        self.load(Origin::FileList, None, files)
    }

    pub fn dir(&self, dir: impl AsRef<Path>) -> Result<Config> {
        let listing = directory_files(dir.as_ref(), &self.options)?;
        self.load(Origin::Directory, Some(listing.directory), listing.files)
    }

    fn load(
        &self,
        origin: Origin,
        directory: Option<PathBuf>,
        files: Vec<PathBuf>,
    ) -> Result<Config> {
        let fragments = load_fragments(&files, &self.options)?;
        let data = merge_fragments(&fragments)?;
        tracing::debug!(origin = %origin, files = files.len(), bytes = data.len(), "Loaded config");
        Ok(Config { origin, data, directory, files })
    }
}
