//! Route table entries and error definitions.

use thiserror::Error;

/// Errors raised while registering or looking up routes.
///
/// Every failure leaves the table unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// An authority-less registration was attempted with no default authority set.
    #[error("a default authority must be set before adding a route without an authority")]
    MissingDefaultAuthority,

    /// An explicitly supplied authority was empty.
    #[error("route authority must not be empty (pattern: {pattern:?})")]
    EmptyAuthority { pattern: String },

    /// The value is not among the values the table was constructed with.
    #[error("value for pattern {pattern:?} is not one of the table's values")]
    UnknownValue { pattern: String },

    /// A string given for lookup is not a valid URI.
    #[error("invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}

/// Result type for route table operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// One registered `(authority, pattern) → value` association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<T> {
    pub authority: String,
    pub pattern: String,
    pub value: T,
}
