//! Glob expansion over the filesystem
//!
//! The literal directory prefix of the pattern is walked to the depth the
//! remaining components need and every file is tested against the compiled
//! pattern. `*`, `?` and classes stop at `/`; `**` crosses directories.
//! Braces are literal characters, not alternations.

use crate::error::{ConfigError, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const META_CHARS: &[char] = &['*', '?', '[', '\\'];

/// Expand `pattern` into the files it matches, sorted by path.
///
/// A pattern that matches nothing, or whose base directory does not exist,
/// yields an empty list. Syntax errors are reported before any directory is
/// read.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile_glob(pattern)?;

    let Some(meta_at) = pattern.find(META_CHARS) else {
        let path = PathBuf::from(pattern);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    };

    let base = match pattern[..meta_at].rfind('/') {
        Some(slash) => &pattern[..=slash],
        None => "",
    };
    let rest = &pattern[base.len()..];
    let max_depth = if rest.contains("**") {
        usize::MAX
    } else {
        rest.split('/').filter(|part| !part.is_empty()).count()
    };

    let root = if base.is_empty() { Path::new(".") } else { Path::new(base) };
    let mut matches = Vec::new();
    for entry in walk(root, max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    tracing::debug!(root = %root.display(), "Glob base is not readable: {}", err);
                } else {
                    tracing::warn!("Skipping unreadable glob entry: {}", err);
                }
                continue;
            }
        };

        let path = entry.path();
        let candidate =
            if base.is_empty() { path.strip_prefix(".").unwrap_or(path) } else { path };
        if matcher.is_match(candidate) && candidate.is_file() {
            matches.push(candidate.to_path_buf());
        }
    }

    matches.sort();
    Ok(matches)
}

/// Build a matcher for one glob pattern, mapping syntax errors to
/// [`ConfigError::Pattern`].
fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(&escape_braces(pattern))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|source| ConfigError::Pattern { pattern: pattern.to_string(), source })?;
    Ok(glob.compile_matcher())
}

/// Escape `{` and `}` so globset matches them literally. Characters already
/// escaped with a backslash are left alone.
fn escape_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '{' || c == '}' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn walk(root: &Path, max_depth: usize) -> WalkDir {
    WalkDir::new(root).min_depth(1).max_depth(max_depth).sort_by_file_name()
}
