//! Fragment merging and JSON compaction

use crate::error::{ConfigError, Result};
use serde::de::IgnoredAny;

/// A fragment is empty when nothing but JSON whitespace survived stripping.
pub fn is_blank(fragment: &[u8]) -> bool {
    fragment.iter().all(|b| is_json_whitespace(*b))
}

/// Join the non-empty fragments with commas, wrap them in braces, then
/// validate and compact the result.
///
/// Empty fragments contribute neither content nor a separator, so an input
/// made only of empty fragments yields `{}`.
pub fn merge_fragments<B: AsRef<[u8]>>(fragments: &[B]) -> Result<String> {
    let total: usize = fragments.iter().map(|f| f.as_ref().len() + 1).sum();
    let mut merged = Vec::with_capacity(total + 2);
    merged.push(b'{');

    let mut included = 0usize;
    for fragment in fragments.iter().map(|f| f.as_ref()).filter(|f| !is_blank(f)) {
        if included > 0 {
            merged.push(b',');
        }
        merged.extend_from_slice(fragment);
        included += 1;
    }
    merged.push(b'}');

    tracing::debug!(
        fragments = fragments.len(),
        included,
        skipped = fragments.len() - included,
        "Merged config fragments"
    );

    compact(&merged)
}

/// Validate `raw` as a single JSON value and strip insignificant whitespace.
///
/// Only whitespace outside string literals is removed, so key order,
/// duplicate keys and number spelling are preserved exactly. Validation is
/// syntactic: numbers are not range checked and nesting depth is unbounded.
pub fn compact(raw: &[u8]) -> Result<String> {
    if let Err(source) = check_syntax(raw) {
        let text = String::from_utf8_lossy(raw).into_owned();
        tracing::debug!(json = %text, "Merged config is not valid JSON");
        return Err(ConfigError::Format { text, source });
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    for &b in raw {
        if in_string {
            out.push(b);
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
            out.push(b);
        } else if !is_json_whitespace(b) {
            out.push(b);
        }
    }

    // Validated JSON is UTF-8 and only ASCII whitespace was removed.
    Ok(String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

fn check_syntax(raw: &[u8]) -> serde_json::Result<()> {
    match std::str::from_utf8(raw) {
        Ok(text) => serde_json::from_str::<IgnoredAny>(text).map(|_| ()),
        // Parsing fully reports where the invalid bytes are.
        Err(_) => serde_json::from_slice::<serde_json::Value>(raw).map(|_| ()),
    }
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
