//! Source enumeration: explicit file lists, glob patterns and directory scans
//!
//! Every entry point returns candidate paths in a deterministic order with
//! ignored names already removed.

use crate::error::{ConfigError, Result};
use crate::options::LoaderOptions;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub mod glob;

/// Returns `true` when the base name of `path` starts with `prefix`.
///
/// A path ending in `..` or `.` has that component as its base name.
pub fn is_ignored(path: &Path, prefix: char) -> bool {
    path.file_name()
        .or_else(|| path.components().next_back().map(|c| c.as_os_str()))
        .map(|name| name.to_string_lossy().starts_with(prefix))
        .unwrap_or(false)
}

/// Drop ignored paths, keeping the relative order of the rest.
pub fn filter_ignored<I, P>(paths: I, options: &LoaderOptions) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut kept = Vec::new();
    let mut ignored = 0usize;
    for path in paths {
        let path = path.into();
        if is_ignored(&path, options.ignore_prefix) {
            ignored += 1;
            continue;
        }
        kept.push(path);
    }
    if ignored > 0 {
        tracing::debug!(ignored, prefix = %options.ignore_prefix, "Skipped ignored config files");
    }
    kept
}

/// Explicit paths are used verbatim, in the given order.
pub fn explicit_files<I, P>(paths: I, options: &LoaderOptions) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    filter_ignored(paths, options)
}

/// Expand `pattern` into matching files, in lexical order.
pub fn glob_files(pattern: &str, options: &LoaderOptions) -> Result<Vec<PathBuf>> {
    let matches = glob::expand(pattern)?;
    tracing::debug!(pattern, matched = matches.len(), "Expanded config glob");
    Ok(filter_ignored(matches, options))
}

/// A directory scan: the cleaned directory plus its candidate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// List the immediate files of `dir`, sorted by name.
///
/// Subdirectories and ignored names are dropped. Candidate paths are joined
/// onto the cleaned directory path.
pub fn directory_files(dir: &Path, options: &LoaderOptions) -> Result<DirectoryListing> {
    let directory = clean_path(dir);
    let entries = fs::read_dir(&directory).map_err(|e| ConfigError::io(&directory, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::io(&directory, e))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();

    let files = filter_ignored(names.iter().map(|name| directory.join(name)), options);
    tracing::debug!(
        directory = %directory.display(),
        candidates = files.len(),
        "Scanned config directory"
    );

    Ok(DirectoryListing { directory, files })
}

/// Lexically clean a path: drop `.` components and fold `..` into its parent
/// where possible. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().map(|c| c.as_os_str()).collect()
}
