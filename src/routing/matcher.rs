//! Route matching logic.
//!
//! # Responsibilities
//! - Compile `(authority, pattern)` registrations
//! - Match a URI's authority (exact, or `*` for any)
//! - Match a URI's path segment by segment
//! - Report the integer code of the first registration that matches
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Authority matching is case-sensitive, except for special schemes (`http`,
//!   `https`, `ws`, `wss`, `ftp`, `file`) whose hosts `url` has already lowercased
//! - Authority and path segments are percent-decoded before comparison, so
//!   registrations are written in plain text (`café`, `my files`)
//! - First registered wins; overlapping registrations are allowed
//! - No regex; each registration costs O(segments) per lookup

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::routing::pattern::{Authority, PathPattern};

/// Schemes whose host `url` normalizes to lowercase.
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

/// A pattern-matching engine that speaks in integer codes.
///
/// Implementations must evaluate registrations in the order they were made and
/// return the code of the first one that matches.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Register `pattern` under `authority`, reported as `code` when matched.
    fn register(&mut self, authority: &str, pattern: &str, code: usize);

    /// Returns the code of the first registration matching `uri`.
    fn lookup(&self, uri: &Url) -> Option<usize>;
}

/// Splits a URI path into its non-empty, percent-decoded segments.
///
/// URIs that cannot be a base (`mailto:x`) have no segments.
pub fn path_segments(uri: &Url) -> Vec<Cow<'_, str>> {
    uri.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).map(decode).collect())
        .unwrap_or_default()
}

fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    authority: Authority,
    pattern: PathPattern,
    code: usize,
}

/// Default engine: an ordered list of compiled patterns scanned linearly.
#[derive(Debug, Clone, Default)]
pub struct SegmentMatcher {
    routes: Vec<CompiledRoute>,
}

impl SegmentMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Match an already-split, already-decoded authority and path.
    pub fn lookup_parts(&self, authority: &str, segments: &[&str]) -> Option<usize> {
        self.find_code(authority, segments, false)
    }

    fn find_code(&self, authority: &str, segments: &[&str], ignore_case: bool) -> Option<usize> {
        self.routes
            .iter()
            .find(|route| {
                let authority_matches = if ignore_case {
                    route.authority.matches_ignore_case(authority)
                } else {
                    route.authority.matches(authority)
                };
                authority_matches && route.pattern.matches(segments)
            })
            .map(|route| route.code)
    }
}

impl PathMatcher for SegmentMatcher {
    fn register(&mut self, authority: &str, pattern: &str, code: usize) {
        self.routes.push(CompiledRoute {
            authority: Authority::parse(authority),
            pattern: PathPattern::parse(pattern),
            code,
        });
    }

    fn lookup(&self, uri: &Url) -> Option<usize> {
        let authority = decode(uri.authority());
        let decoded = path_segments(uri);
        let segments: Vec<&str> = decoded.iter().map(|segment| &**segment).collect();
        let ignore_case = SPECIAL_SCHEMES.contains(&uri.scheme());
        self.find_code(&authority, &segments, ignore_case)
    }
}
