//! Route pattern matching logic.
//!
//! # Responsibilities
//! - Compare a route pattern against a concrete request path
//! - Extract named segments (`:name`) into [`Params`]
//!
//! # Design Decisions
//! - Segments are split on `/` with no normalization (case, repeated
//!   delimiters and percent-encoding are compared as-is)
//! - Byte-identical pattern and path short-circuit before splitting
//! - A segment that is only the capture marker captures under the empty name
//! - Total over any two strings: never panics, never errors

use std::collections::HashMap;

/// Segment delimiter shared by patterns and paths.
pub const SEGMENT_DELIMITER: char = '/';

/// Leading character marking a pattern segment as a named capture.
pub const CAPTURE_MARKER: char = ':';

/// Parameters captured from a matched path, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value captured for `name`, if the pattern declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Record a capture. A repeated name keeps the later value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Match `path` against `pattern`.
///
/// Returns `None` when the path does not fit the pattern, otherwise the
/// captured parameters (possibly empty).
pub fn match_pattern(pattern: &str, path: &str) -> Option<Params> {
    if pattern == path {
        return Some(Params::new());
    }

    let patterns: Vec<&str> = pattern.split(SEGMENT_DELIMITER).collect();
    let paths: Vec<&str> = path.split(SEGMENT_DELIMITER).collect();

    if patterns.len() != paths.len() {
        return None;
    }

    let mut params = Params::new();
    for (segment, value) in patterns.iter().zip(paths.iter()) {
        if segment == value {
            continue;
        }
        match segment.strip_prefix(CAPTURE_MARKER) {
            Some(name) => params.insert(name, *value),
            None => return None,
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_identical_strings_match_without_params() {
        for p in ["/", "/about", "/users/:id", "", "//x//"] {
            let m = match_pattern(p, p).expect("identical strings must match");
            assert!(m.is_empty(), "pattern {p:?}");
        }
    }

    #[test]
    fn test_single_param() {
        let m = match_pattern("/users/:id", "/users/42").unwrap();
        assert_eq!(m, params(&[("id", "42")]));
        assert_eq!(m.get("id"), Some("42"));
        assert_eq!(m.get("name"), None);
    }

    #[test]
    fn test_multiple_params() {
        let m = match_pattern(
            "/users/:user_id/addresses/:address_id",
            "/users/7/addresses/99",
        )
        .unwrap();
        assert_eq!(m, params(&[("user_id", "7"), ("address_id", "99")]));

        let mut pairs: Vec<_> = m.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("address_id", "99"), ("user_id", "7")]);
    }

    #[test]
    fn test_segment_count_mismatch() {
        assert!(match_pattern("/users/:id", "/users/42/extra").is_none());
        assert!(match_pattern("/users/:id", "/users").is_none());
        assert!(match_pattern("/users/:id", "/users/42/").is_none());
    }

    #[test]
    fn test_literal_mismatch_short_circuits() {
        assert!(match_pattern("/users/:id", "/accounts/42").is_none());
        assert!(match_pattern("/users/:id/posts", "/users/42/comments").is_none());
        // Case is significant.
        assert!(match_pattern("/Users/:id", "/users/42").is_none());
    }

    #[test]
    fn test_bare_marker_captures_empty_name() {
        let m = match_pattern("/files/:", "/files/report").unwrap();
        assert_eq!(m.get(""), Some("report"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_param_may_capture_empty_segment() {
        let m = match_pattern("/users/:id", "/users/").unwrap();
        assert_eq!(m.get("id"), Some(""));
    }

    #[test]
    fn test_empty_segments_compare_literally() {
        // Doubled delimiter: not byte-identical, but literal segments line up.
        let m = match_pattern("//users/:id", "//users/5").unwrap();
        assert_eq!(m, params(&[("id", "5")]));
        assert!(match_pattern("/users//:id", "/users/5").is_none());
    }

    #[test]
    fn test_no_percent_decoding() {
        let m = match_pattern("/files/:name", "/files/a%20b").unwrap();
        assert_eq!(m.get("name"), Some("a%20b"));
        assert!(match_pattern("/files/a b", "/files/a%20b").is_none());
    }

    #[test]
    fn test_repeated_name_keeps_last_value() {
        let m = match_pattern("/:x/:x", "/a/b").unwrap();
        assert_eq!(m.get("x"), Some("b"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_empty_pattern() {
        assert!(match_pattern("", "").is_some());
        assert!(match_pattern("", "/").is_none());
        assert!(match_pattern("", "/users").is_none());
    }
}
