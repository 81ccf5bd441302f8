//! Line comment stripping
//!
//! This is a textual strip: a marker inside a JSON string literal is treated
//! as a comment like any other.

use crate::options::DEFAULT_COMMENT_MARKER;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

static DEFAULT_COMMENT: Lazy<Regex> = Lazy::new(|| comment_regex(DEFAULT_COMMENT_MARKER));

/// Matches from `marker` up to, but not including, the next newline.
fn comment_regex(marker: char) -> Regex {
    let pattern = format!("{}(?-u:[^\\n])*", regex::escape(marker.encode_utf8(&mut [0u8; 4])));
    Regex::new(&pattern).expect("escaped marker is a valid regex")
}

/// Remove every `marker`-to-end-of-line comment from `raw`.
///
/// Newlines and every byte outside a comment are left untouched.
pub fn strip_comments(raw: &[u8], marker: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let needle = marker.encode_utf8(&mut buf).as_bytes();
    if !contains(raw, needle) {
        return raw.to_vec();
    }

    let custom;
    let regex = if marker == DEFAULT_COMMENT_MARKER {
        &*DEFAULT_COMMENT
    } else {
        custom = comment_regex(marker);
        &custom
    };
    regex.replace_all(raw, &b""[..]).into_owned()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_trailing_comments_and_keeps_newlines() {
        let raw = b"\"a\": 1, # first\n\"b\": 2 # second\n";
        assert_eq!(strip_comments(raw, '#'), b"\"a\": 1, \n\"b\": 2 \n".to_vec());
    }

    #[test]
    fn comment_only_file_reduces_to_newlines() {
        assert_eq!(strip_comments(b"# hello\n# world", '#'), b"\n".to_vec());
    }

    #[test]
    fn text_without_marker_is_unchanged() {
        let raw = b"  \"name\": \"svc\",\r\n\t\"port\": 8080\n";
        assert_eq!(strip_comments(raw, '#'), raw.to_vec());
    }

    #[test]
    fn marker_inside_string_is_still_stripped() {
        assert_eq!(strip_comments(b"\"color\": \"#fff\"", '#'), b"\"color\": \"".to_vec());
    }

    #[test]
    fn custom_marker_is_escaped() {
        let raw = b"\"a\": 1 ; note\n\"b\": \"x.y\"\n";
        assert_eq!(strip_comments(raw, ';'), b"\"a\": 1 \n\"b\": \"x.y\"\n".to_vec());

        // `.` would match anything if it were not escaped
        let raw = b"\"a\": 1 . gone\n\"b\": 2\n";
        assert_eq!(strip_comments(raw, '.'), b"\"a\": 1 \n\"b\": 2\n".to_vec());
    }

    #[test]
    fn comment_runs_over_invalid_utf8() {
        assert_eq!(strip_comments(b"1 # \xff\xfe tail\n2", '#'), b"1 \n2".to_vec());
    }

    #[test]
    fn multibyte_marker() {
        let raw = "\"a\": 1 § note\n".as_bytes();
        assert_eq!(strip_comments(raw, '§'), b"\"a\": 1 \n".to_vec());
    }
}
