//! Header name matching.
//!
//! # Responsibilities
//! - Match a header name against a configured pattern
//! - Expand the `HTTP_REQUEST_HEADERS` / `HTTP_RESPONSE_HEADERS` tokens
//! - Combine patterns with OR semantics
//!
//! # Design Decisions
//! - Matching is case-insensitive (RFC 9110)
//! - `*` is the only wildcard and may appear anywhere, any number of times
//! - No regex: a glob match is linear in practice and never allocates
//! - Empty pattern set = never matches

use crate::mapping::standard;

/// Token standing for every standard request header.
pub const HTTP_REQUEST_HEADERS: &str = "HTTP_REQUEST_HEADERS";

/// Token standing for every standard response header.
pub const HTTP_RESPONSE_HEADERS: &str = "HTTP_RESPONSE_HEADERS";

/// Trait for deciding whether a header name participates in mapping.
pub trait NameMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the header name matches.
    fn matches(&self, name: &str) -> bool;
}

/// A single configured header name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderNamePattern {
    /// All standard request headers.
    StandardRequest,
    /// All standard response headers.
    StandardResponse,
    /// Glob over the header name.
    Glob(String),
}

impl HeaderNamePattern {
    pub fn new(pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern.eq_ignore_ascii_case(HTTP_REQUEST_HEADERS) {
            HeaderNamePattern::StandardRequest
        } else if pattern.eq_ignore_ascii_case(HTTP_RESPONSE_HEADERS) {
            HeaderNamePattern::StandardResponse
        } else {
            HeaderNamePattern::Glob(pattern.to_string())
        }
    }
}

impl From<&str> for HeaderNamePattern {
    fn from(pattern: &str) -> Self {
        HeaderNamePattern::new(pattern)
    }
}

impl NameMatcher for HeaderNamePattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            HeaderNamePattern::StandardRequest => standard::is_request_header(name),
            HeaderNamePattern::StandardResponse => standard::is_response_header(name),
            HeaderNamePattern::Glob(pattern) => glob_matches(pattern, name),
        }
    }
}

/// Combines patterns with OR semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<HeaderNamePattern>,
}

impl PatternSet {
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<HeaderNamePattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[HeaderNamePattern] {
        &self.patterns
    }
}

impl NameMatcher for PatternSet {
    fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

/// Case-insensitive glob match where `*` matches any run of characters.
fn glob_matches(pattern: &str, name: &str) -> bool {
    let p = pattern.as_bytes();
    let n = name.as_bytes();
    let (mut pi, mut ni) = (0, 0);
    // position of the last `*` and the name index it is currently absorbing up to
    let mut backtrack: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && p[pi] == b'*' {
            backtrack = Some((pi, ni));
            pi += 1;
        } else if pi < p.len() && p[pi].eq_ignore_ascii_case(&n[ni]) {
            pi += 1;
            ni += 1;
        } else if let Some((star, absorbed)) = backtrack {
            pi = star + 1;
            ni = absorbed + 1;
            backtrack = Some((star, absorbed + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == b'*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix() {
        let prefix = HeaderNamePattern::new("x*");
        assert!(prefix.matches("x1"));
        assert!(!prefix.matches("1x"));

        let suffix = HeaderNamePattern::new("*z");
        assert!(suffix.matches("1z"));
        assert!(!suffix.matches("z1"));
    }

    #[test]
    fn test_infix_and_wildcard() {
        let infix = HeaderNamePattern::new("a*f");
        assert!(infix.matches("abcdef"));
        assert!(infix.matches("af"));
        assert!(!infix.matches("abc"));
        assert!(!infix.matches("def"));

        let any = HeaderNamePattern::new("*");
        assert!(any.matches("anything"));
        assert!(any.matches(""));

        assert!(HeaderNamePattern::new("a*b*c").matches("aXXbYYbZc"));
        assert!(!HeaderNamePattern::new("a*b*c").matches("aXXcYYb"));
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let exact = HeaderNamePattern::new("X-Foo");
        assert!(exact.matches("x-foo"));
        assert!(exact.matches("X-FOO"));
        assert!(!exact.matches("x-foobar"));
    }

    #[test]
    fn test_standard_tokens() {
        let request = HeaderNamePattern::new("HTTP_REQUEST_HEADERS");
        assert_eq!(request, HeaderNamePattern::StandardRequest);
        assert!(request.matches("accept"));
        assert!(!request.matches("Content-Disposition"));

        let response = HeaderNamePattern::new("http_response_headers");
        assert!(response.matches("Content-Disposition"));
        assert!(!response.matches("Accept"));
    }

    #[test]
    fn test_pattern_set() {
        let set = PatternSet::new(["foo*", HTTP_RESPONSE_HEADERS]);
        assert!(set.matches("foobar"));
        assert!(set.matches("Content-Type"));
        assert!(!set.matches("Accept"));
        assert_eq!(set.patterns().len(), 2);
        assert_eq!(set.patterns()[1], HeaderNamePattern::StandardResponse);
        assert!(!set.is_empty());

        assert!(PatternSet::default().is_empty());
        assert!(!PatternSet::default().matches("foo"));
    }
}
