//! Loader options passed explicitly to enumeration, stripping and loading

use serde::Deserialize;

pub const DEFAULT_IGNORE_PREFIX: char = '.';
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// Options controlling how sources are enumerated and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderOptions {
    /// Files whose base name starts with this character are skipped.
    pub ignore_prefix: char,
    /// Everything from this character to the end of a line is removed.
    pub comment_marker: char,
    /// Size of a dedicated read pool; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            ignore_prefix: DEFAULT_IGNORE_PREFIX,
            comment_marker: DEFAULT_COMMENT_MARKER,
            threads: None,
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_prefix(mut self, prefix: char) -> Self {
        self.ignore_prefix = prefix;
        self
    }

    pub fn comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// A value of zero is treated as `None`.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|&n| n > 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hidden_files_and_hash_comments() {
        let opts = LoaderOptions::default();
        assert_eq!(opts.ignore_prefix, '.');
        assert_eq!(opts.comment_marker, '#');
        assert!(opts.threads.is_none());
    }

    #[test]
    fn zero_threads_means_global_pool() {
        let opts = LoaderOptions::new().threads(Some(0));
        assert!(opts.threads.is_none());
        let opts = LoaderOptions::new().threads(Some(3));
        assert_eq!(opts.threads, Some(3));
    }

    #[test]
    fn deserializes_partial_table() {
        let opts: LoaderOptions = toml::from_str("comment_marker = ';'\n").expect("parse");
        assert_eq!(opts.comment_marker, ';');
        assert_eq!(opts.ignore_prefix, '.');
    }
}
