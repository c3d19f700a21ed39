//! Path template compilation
//!
//! Turns a path template like `/users/:id` or `/files/*` into a compiled
//! matcher plus the ordered list of capture keys. Compilation is a pure
//! function: no state, no diagnostics (template shape warnings are emitted
//! where routes are constructed, see [`crate::route`]).
//!
//! Template grammar, per `/`-separated segment:
//!
//! - `:name` - named parameter, matches one-or-more non-`/` characters
//! - `*` - wildcard, matches the remainder of the path including `/`
//! - anything else - literal, matched verbatim (regex metacharacters like
//!   `.` or `+` are escaped so they match themselves)
//!
//! An empty segment (from a leading, trailing, or double `/`) is a literal
//! empty string and matches only an actual empty segment in the candidate.

use regex::Regex;

/// A compiled path template.
///
/// The regex is anchored on both ends, so a pattern recognizes full-string
/// matches only - no prefix matching.
///
/// # Example
///
/// ```
/// use flow_router::PathPattern;
///
/// let pattern = PathPattern::compile("/users/:id");
/// assert_eq!(pattern.keys(), ["id"]);
///
/// let captures = pattern.match_path("/users/123").unwrap();
/// assert_eq!(captures, ["123"]);
///
/// assert!(pattern.match_path("/users").is_none());
/// assert!(pattern.match_path("/users/123/posts").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
    keys: Vec<String>,
}

impl PathPattern {
    /// Compile a path template into a matcher.
    ///
    /// Never fails: every segment is either a capture group or an escaped
    /// literal, so the assembled regex is valid by construction.
    pub fn compile(template: &str) -> Self {
        let mut keys = Vec::new();

        let source: Vec<String> = template
            .split('/')
            .map(|segment| {
                if let Some(name) = segment.strip_prefix(':') {
                    keys.push(name.to_string());
                    "([^/]+)".to_string()
                } else if segment == "*" {
                    // The wildcard capture is keyed by "*" itself.
                    keys.push("*".to_string());
                    "(.*)?".to_string()
                } else {
                    regex::escape(segment)
                }
            })
            .collect();

        let regex = Regex::new(&format!("^{}$", source.join("/")))
            .expect("escaped template segments always assemble into a valid pattern");

        Self { regex, keys }
    }

    /// Ordered capture keys, positionally aligned with the values returned
    /// by [`match_path`](Self::match_path).
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Match a candidate pathname against this pattern.
    ///
    /// Returns the captured substrings in template order, or `None` if the
    /// pathname does not match. A wildcard that matched nothing (e.g.
    /// `/files/*` against `/files/`) captures the empty string.
    pub fn match_path(&self, pathname: &str) -> Option<Vec<String>> {
        let captures = self.regex.captures(pathname)?;

        let values = (1..captures.len())
            .map(|i| {
                captures
                    .get(i)
                    .map_or_else(String::new, |m| m.as_str().to_string())
            })
            .collect();

        Some(values)
    }

    /// Check whether a pathname matches without extracting captures.
    pub fn is_match(&self, pathname: &str) -> bool {
        self.regex.is_match(pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pattern() {
        let pattern = PathPattern::compile("/users");

        assert!(pattern.keys().is_empty());
        assert_eq!(pattern.match_path("/users"), Some(vec![]));
        assert!(pattern.match_path("/posts").is_none());
        assert!(pattern.match_path("/users/123").is_none());
    }

    #[test]
    fn test_parametric_pattern() {
        let pattern = PathPattern::compile("/users/:id");

        assert_eq!(pattern.keys(), ["id"]);
        assert_eq!(
            pattern.match_path("/users/123"),
            Some(vec!["123".to_string()])
        );
        assert!(pattern.match_path("/users").is_none());
        assert!(pattern.match_path("/users/").is_none());
    }

    #[test]
    fn test_multiple_parameters_in_order() {
        let pattern = PathPattern::compile("/users/:userId/posts/:postId");

        assert_eq!(pattern.keys(), ["userId", "postId"]);
        assert_eq!(
            pattern.match_path("/users/42/posts/7"),
            Some(vec!["42".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn test_wildcard_captures_remainder() {
        let pattern = PathPattern::compile("/files/*");

        assert_eq!(pattern.keys(), ["*"]);
        assert_eq!(
            pattern.match_path("/files/a/b/c"),
            Some(vec!["a/b/c".to_string()])
        );
    }

    #[test]
    fn test_wildcard_empty_capture() {
        let pattern = PathPattern::compile("/files/*");

        // Trailing slash present: wildcard matches the empty remainder.
        assert_eq!(pattern.match_path("/files/"), Some(vec![String::new()]));
        // No trailing slash: the literal "/files/" prefix is absent.
        assert!(pattern.match_path("/files").is_none());
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let pattern = PathPattern::compile("/v1.0/c++");

        assert!(pattern.match_path("/v1.0/c++").is_some());
        assert!(pattern.match_path("/v1x0/c++").is_none());
        assert!(pattern.match_path("/v1.0/cc").is_none());
    }

    #[test]
    fn test_full_string_match_only() {
        let pattern = PathPattern::compile("/a");

        assert!(pattern.match_path("/a/b").is_none());
        assert!(pattern.match_path("x/a").is_none());
    }

    #[test]
    fn test_empty_segment_is_literal() {
        let pattern = PathPattern::compile("/a//b");

        assert!(pattern.match_path("/a//b").is_some());
        assert!(pattern.match_path("/a/b").is_none());
        assert!(pattern.match_path("/a/x/b").is_none());
    }

    #[test]
    fn test_keys_align_with_captures() {
        let pattern = PathPattern::compile("/a/:x/*");

        let captures = pattern.match_path("/a/1/rest/of/path").unwrap();
        assert_eq!(pattern.keys().len(), captures.len());
        assert_eq!(captures, ["1", "rest/of/path"]);
    }

    #[test]
    fn test_non_final_wildcard_matches_greedily() {
        // Accepted with greedy semantics; route construction warns about it.
        let pattern = PathPattern::compile("/a/*/b");

        let captures = pattern.match_path("/a/x/y/b").unwrap();
        assert_eq!(captures, ["x/y"]);
    }
}
