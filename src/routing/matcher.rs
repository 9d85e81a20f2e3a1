//! Segment matching between a concrete path and a route pattern.
//!
//! # Responsibilities
//! - Decide whether a path still has segments after its first one
//! - Extract the value bound by the first dynamic segment of a pattern
//! - Walk a concrete path and a pattern together, one dynamic span at a time
//!
//! # Design Decisions
//! - Pure functions over borrowed strings; nothing is cached between calls
//! - Each side is read through its own cursor, so an offset found in the
//!   pattern is never used to slice the concrete path
//! - No trailing-slash normalization: `/user/` and `/user` differ
//! - Parameters captured before a divergence stay in the result

use crate::routing::types::{MatchResult, ParameterMap, DYNAMIC_MARKER};

/// Returns true if something follows the first `/` after the leading character.
///
/// ```
/// use spa_router::routing::matcher::has_continuation_after_first_slash;
///
/// assert!(has_continuation_after_first_slash("/user/Ikrom"));
/// assert!(!has_continuation_after_first_slash("/user"));
/// assert!(!has_continuation_after_first_slash("/user/"));
/// ```
pub fn has_continuation_after_first_slash(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next();
    let tail = chars.as_str();

    match tail.find('/') {
        Some(index) => index + 1 < tail.len(),
        None => false,
    }
}

/// Extracts the parameter bound by the first dynamic segment of `pattern`.
///
/// The name runs from just after `/:` to the next `/`. The value is the
/// segment of `concrete` sitting at the same position. An empty name or value
/// yields an empty map.
///
/// ```
/// use spa_router::routing::matcher::extract_parameter;
///
/// let params = extract_parameter("/user/Ikrom", "/user/:name");
/// assert_eq!(params.get("name").map(String::as_str), Some("Ikrom"));
/// ```
pub fn extract_parameter(concrete: &str, pattern: &str) -> ParameterMap {
    let mut parameters = ParameterMap::new();

    if let Some(span) = Cursor::new(pattern).dynamic_span() {
        let position = span.prefix.split('/').count();
        let value = concrete.split('/').nth(position).unwrap_or_default();

        if !span.name.is_empty() && !value.is_empty() {
            parameters.insert(span.name.to_string(), value.to_string());
        }
    }

    parameters
}

/// Compares a concrete path with a pattern and collects bound parameters.
///
/// Only a walk that accounts for every segment reports `matched = true`.
/// Parameters found before the walk fails are kept in the result.
pub fn recursive_match(concrete: &str, pattern: &str) -> MatchResult {
    let mut parameters = ParameterMap::new();
    let matched = walk(Cursor::new(concrete), Cursor::new(pattern), &mut parameters);

    MatchResult {
        matched,
        parameters,
    }
}

fn walk(concrete: Cursor<'_>, pattern: Cursor<'_>, parameters: &mut ParameterMap) -> bool {
    if concrete.has_continuation() && pattern.has_continuation() {
        let Some(span) = pattern.dynamic_span() else {
            return concrete == pattern;
        };

        parameters.extend(extract_parameter(concrete.as_str(), pattern.as_str()));

        let Some(concrete_rest) = concrete.pop_segment_after(span.prefix) else {
            return false;
        };

        // A static tail after the last dynamic segment cannot be consumed.
        let pattern_rest = if span.rest.has_dynamic_segment() || concrete_rest.is_empty() {
            span.rest
        } else {
            Cursor::new("")
        };

        return walk(concrete_rest, pattern_rest, parameters);
    }

    if concrete == pattern {
        return true;
    }

    if pattern.is_single_dynamic_segment() && concrete.slash_count() == 1 {
        parameters.extend(extract_parameter(concrete.as_str(), pattern.as_str()));
        return true;
    }

    false
}

/// Read position over the unconsumed tail of a path or pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor<'a> {
    rest: &'a str,
}

/// The first dynamic segment of a pattern and what surrounds it.
#[derive(Debug, Clone, Copy)]
struct DynamicSpan<'a> {
    /// Literal text before the `/:` marker.
    prefix: &'a str,
    name: &'a str,
    /// Pattern remainder, starting at the `/` that closes the segment.
    rest: Cursor<'a>,
}

impl<'a> Cursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    fn as_str(&self) -> &'a str {
        self.rest
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn has_continuation(&self) -> bool {
        has_continuation_after_first_slash(self.rest)
    }

    fn has_dynamic_segment(&self) -> bool {
        self.rest.contains(DYNAMIC_MARKER)
    }

    fn slash_count(&self) -> usize {
        self.rest.matches('/').count()
    }

    fn is_single_dynamic_segment(&self) -> bool {
        self.rest.matches(DYNAMIC_MARKER).count() == 1 && self.slash_count() == 1
    }

    fn dynamic_span(&self) -> Option<DynamicSpan<'a>> {
        let cut = self.rest.find(DYNAMIC_MARKER)?;
        let (name, rest) = split_segment(&self.rest[cut + DYNAMIC_MARKER.len()..]);

        Some(DynamicSpan {
            prefix: &self.rest[..cut],
            name,
            rest: Cursor::new(rest),
        })
    }

    /// Consumes `prefix` and the segment right after it.
    ///
    /// Fails unless `prefix` ends exactly on a segment boundary of this cursor.
    fn pop_segment_after(&self, prefix: &str) -> Option<Cursor<'a>> {
        let after = self.rest.strip_prefix(prefix)?.strip_prefix('/')?;
        let (_, rest) = split_segment(after);
        Some(Cursor::new(rest))
    }
}

/// Splits at the next `/`: the segment text, and the remainder starting at that `/`.
fn split_segment(text: &str) -> (&str, &str) {
    match text.find('/') {
        Some(index) => text.split_at(index),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_continuation_after_first_slash() {
        assert!(has_continuation_after_first_slash("/user/Ikrom"));
        assert!(!has_continuation_after_first_slash("/user"));
        assert!(!has_continuation_after_first_slash("/user/"));
        assert!(!has_continuation_after_first_slash("/"));
        assert!(!has_continuation_after_first_slash(""));
        assert!(has_continuation_after_first_slash("/a/b/c"));
    }

    #[test]
    fn test_extract_parameter() {
        assert_eq!(
            extract_parameter("/user/Ikrom", "/user/:name"),
            params(&[("name", "Ikrom")])
        );
        assert_eq!(
            extract_parameter("/user/Ikrom/posts", "/user/:name/posts"),
            params(&[("name", "Ikrom")])
        );
        // First marker only
        assert_eq!(
            extract_parameter("/a/1/2", "/a/:x/:y"),
            params(&[("x", "1")])
        );
    }

    #[test]
    fn test_extract_parameter_without_marker() {
        assert!(extract_parameter("/user/Ikrom", "/user/name").is_empty());
    }

    #[test]
    fn test_extract_parameter_degenerate() {
        // No concrete segment at the dynamic position
        assert!(extract_parameter("/user", "/user/:name").is_empty());
        // Empty value
        assert!(extract_parameter("/user/", "/user/:name").is_empty());
        // Empty name
        assert!(extract_parameter("/user/Ikrom", "/user/:").is_empty());
    }

    #[test]
    fn test_full_dynamic_match() {
        let result = recursive_match("/user/Ikrom/Murodov/18", "/user/:name/:surname/:age");
        assert!(result.matched);
        assert_eq!(
            result.parameters,
            params(&[("name", "Ikrom"), ("surname", "Murodov"), ("age", "18")])
        );
    }

    #[test]
    fn test_partial_capture_on_divergence() {
        let result = recursive_match("/user/Ikrom/Murodov/18", "/user/:name/:surname/contact");
        assert!(!result.matched);
        assert_eq!(
            result.parameters,
            params(&[("name", "Ikrom"), ("surname", "Murodov")])
        );
    }

    #[test]
    fn test_static_patterns_need_exact_equality() {
        assert!(recursive_match("/about", "/about").matched);
        assert!(recursive_match("/a/b/c", "/a/b/c").matched);
        assert!(recursive_match("/", "/").matched);
        assert!(!recursive_match("/about/", "/about").matched);
        assert!(!recursive_match("/a/b", "/a/c").matched);
        assert!(!recursive_match("/a/b/c", "/a/b").matched);
    }

    #[test]
    fn test_single_segment_shortcut() {
        let result = recursive_match("/Ikrom", "/:name");
        assert!(result.matched);
        assert_eq!(result.parameters, params(&[("name", "Ikrom")]));

        assert!(!recursive_match("/a/b", "/:name").matched);
    }

    #[test]
    fn test_dynamic_tail_segment() {
        let result = recursive_match("/user/42", "/user/:id");
        assert!(result.matched);
        assert_eq!(result.parameters, params(&[("id", "42")]));
    }

    #[test]
    fn test_extra_concrete_segments_fail() {
        let result = recursive_match("/user/42/extra", "/user/:id");
        assert!(!result.matched);
        assert_eq!(result.parameters, params(&[("id", "42")]));
    }

    #[test]
    fn test_missing_concrete_segments_fail() {
        assert!(!recursive_match("/user/42", "/user/:id/:tab").matched);
    }

    #[test]
    fn test_prefix_mismatch_fails() {
        assert!(!recursive_match("/user/Ikrom", "/u/:name").matched);
        assert!(!recursive_match("/admin/1/2", "/user/:id/:tab").matched);
    }

    #[test]
    fn test_prefix_must_end_on_segment_boundary() {
        // "/username" starts with "/user" but not as a whole segment
        assert!(!recursive_match("/username/x/y", "/user/:a/:b").matched);
    }

    #[test]
    fn test_trailing_slash_changes_outcome() {
        assert!(recursive_match("/user/1", "/user/:id").matched);
        assert!(!recursive_match("/user/1/", "/user/:id").matched);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = recursive_match("/user/Ikrom/Murodov/18", "/user/:name/:surname/:age");
        let second = recursive_match("/user/Ikrom/Murodov/18", "/user/:name/:surname/:age");
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let result = recursive_match("/a/1/2", "/a/:id/:id");
        assert!(result.matched);
        assert_eq!(result.parameters, params(&[("id", "2")]));
    }
}
