//! Parallel fragment loading
//!
//! One read-and-strip task per file runs on the rayon pool. Results are
//! collected through an indexed parallel iterator, so fragment `i` always
//! belongs to `paths[i]` no matter which read finishes first.

use crate::error::{ConfigError, Result};
use crate::options::LoaderOptions;
use crate::strip::strip_comments;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read and strip every file in `paths`, in input order.
///
/// The first read failure aborts the whole load.
pub fn load_fragments(paths: &[PathBuf], options: &LoaderOptions) -> Result<Vec<Vec<u8>>> {
    load_fragments_with(paths, options, |path| fs::read(path))
}

/// Like [`load_fragments`], reading file contents through `read`.
pub fn load_fragments_with<F>(
    paths: &[PathBuf],
    options: &LoaderOptions,
    read: F,
) -> Result<Vec<Vec<u8>>>
where
    F: Fn(&Path) -> io::Result<Vec<u8>> + Sync,
{
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let marker = options.comment_marker;
    let read_all = || {
        paths
            .par_iter()
            .map(|path| {
                let raw = read(path).map_err(|e| ConfigError::io(path, e))?;
                tracing::trace!(path = %path.display(), bytes = raw.len(), "Read config fragment");
                Ok(strip_comments(&raw, marker))
            })
            .collect::<Result<Vec<_>>>()
    };

    match options.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(read_all),
            Err(e) => {
                tracing::warn!(
                    "Failed to build a {}-thread read pool, using the global pool: {}",
                    threads,
                    e
                );
                read_all()
            }
        },
        None => read_all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_numbered(tmp: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = tmp.path().join(format!("{i:02}.json"));
                fs::write(&path, format!("\"k{i}\": {i} # file {i}\n")).expect("write fragment");
                path
            })
            .collect()
    }

    #[test]
    fn no_paths_spawns_nothing() {
        let calls = AtomicUsize::new(0);
        let fragments = load_fragments_with(&[], &LoaderOptions::default(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        })
        .expect("load");
        assert!(fragments.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fragments_are_stripped() {
        let tmp = TempDir::new().expect("tmp");
        let paths = write_numbered(&tmp, 2);
        let fragments = load_fragments(&paths, &LoaderOptions::default()).expect("load");
        assert_eq!(fragments, vec![b"\"k0\": 0 \n".to_vec(), b"\"k1\": 1 \n".to_vec()]);
    }

    #[test]
    fn order_is_independent_of_read_delays() {
        let tmp = TempDir::new().expect("tmp");
        let count = 8;
        let paths = write_numbered(&tmp, count);

        // Earlier files take longest, so completions arrive in reverse.
        let slow_reader = |path: &Path| {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("0");
            let index: u64 = stem.parse().unwrap_or(0);
            thread::sleep(Duration::from_millis((count as u64 - index) * 15));
            fs::read(path)
        };

        let expected: Vec<Vec<u8>> =
            (0..count).map(|i| format!("\"k{i}\": {i} \n").into_bytes()).collect();
        for opts in [LoaderOptions::default(), LoaderOptions::default().threads(Some(4))] {
            let fragments = load_fragments_with(&paths, &opts, slow_reader).expect("load");
            assert_eq!(fragments, expected);
        }
    }

    #[test]
    fn single_worker_pool_gives_same_result() {
        let tmp = TempDir::new().expect("tmp");
        let paths = write_numbered(&tmp, 5);
        let global = load_fragments(&paths, &LoaderOptions::default()).expect("global");
        let single =
            load_fragments(&paths, &LoaderOptions::default().threads(Some(1))).expect("single");
        assert_eq!(global, single);
    }

    #[test]
    fn one_missing_file_fails_the_load() {
        let tmp = TempDir::new().expect("tmp");
        let mut paths = write_numbered(&tmp, 3);
        paths.insert(1, tmp.path().join("missing.json"));

        let err = load_fragments(&paths, &LoaderOptions::default()).expect_err("missing file");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn custom_marker_is_used() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("app.json");
        fs::write(&path, "\"tag\": \"#1\" // note\n").expect("write");

        let opts = LoaderOptions::default().comment_marker('/');
        let fragments = load_fragments(&[path], &opts).expect("load");
        assert_eq!(fragments, vec![b"\"tag\": \"#1\" \n".to_vec()]);
    }
}
