//! Pattern compilation.
//!
//! A path pattern is a `/`-separated list of segments:
//! - `*` matches any single non-empty path segment
//! - `#` matches any single segment made only of ASCII digits
//! - anything else matches an identical segment (case-sensitive)
//!
//! Segment counts must be equal. A single leading `/` and any trailing `/` are
//! ignored, and the empty pattern matches a URI with no path segments.

use std::fmt;

/// Token matching any single segment.
pub const WILDCARD: &str = "*";

/// Token matching any single all-numeric segment.
pub const NUMERIC: &str = "#";

/// Strips one leading `/` and every trailing `/` from a pattern.
pub fn trim_pattern(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
    pattern.trim_end_matches('/')
}

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Wildcard,
    Numeric,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw {
            WILDCARD => Segment::Wildcard,
            NUMERIC => Segment::Numeric,
            literal => Segment::Literal(literal.to_string()),
        }
    }

    /// Returns true if `segment` satisfies this pattern segment.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Segment::Literal(text) => text == segment,
            Segment::Wildcard => !segment.is_empty(),
            Segment::Numeric => !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Wildcard => f.write_str(WILDCARD),
            Segment::Numeric => f.write_str(NUMERIC),
        }
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern such as `"foos/#"`.
    ///
    /// Compilation never fails: segments that are not exactly `*` or `#` are literals.
    pub fn parse(pattern: &str) -> Self {
        let trimmed = trim_pattern(pattern);
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(Segment::parse).collect()
        };
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if every path segment satisfies the pattern segment at the same index.
    pub fn matches(&self, path_segments: &[&str]) -> bool {
        self.segments.len() == path_segments.len()
            && self
                .segments
                .iter()
                .zip(path_segments)
                .all(|(pattern, segment)| pattern.matches(segment))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// The authority half of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authority {
    /// `*`: matches any authority present on the URI.
    Any,
    Exact(String),
}

impl Authority {
    pub fn parse(authority: &str) -> Self {
        if authority == WILDCARD {
            Authority::Any
        } else {
            Authority::Exact(authority.to_string())
        }
    }

    pub fn matches(&self, authority: &str) -> bool {
        match self {
            Authority::Any => !authority.is_empty(),
            Authority::Exact(expected) => expected == authority,
        }
    }

    /// Like [`matches`](Self::matches), ignoring ASCII case.
    pub fn matches_ignore_case(&self, authority: &str) -> bool {
        match self {
            Authority::Any => !authority.is_empty(),
            Authority::Exact(expected) => expected.eq_ignore_ascii_case(authority),
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authority::Any => f.write_str(WILDCARD),
            Authority::Exact(authority) => f.write_str(authority),
        }
    }
}
