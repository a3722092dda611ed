//! Configuration schema definitions.
//!
//! A route table file lists routes in precedence order. Values are deserialized
//! directly into the table's result type.
//!
//! ```toml
//! default_authority = "com.example.provider"
//! no_match = "unknown"
//!
//! [[routes]]
//! path = "foos"
//! value = "foos"
//!
//! [[routes]]
//! authority = "com.example.other"
//! path = "foos/#"
//! value = "foo"
//! ```

use serde::Deserialize;

/// Root configuration for a route table.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RouteTableConfig<T> {
    /// Authority for routes that do not name one.
    #[serde(default)]
    pub default_authority: Option<String>,

    /// Value returned when no route matches.
    #[serde(default)]
    pub no_match: Option<T>,

    /// Routes, in registration order.
    #[serde(default)]
    pub routes: Vec<RouteConfig<T>>,
}

impl<T> Default for RouteTableConfig<T> {
    fn default() -> Self {
        Self {
            default_authority: None,
            no_match: None,
            routes: Vec::new(),
        }
    }
}

/// A single `(authority, path) → value` route.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RouteConfig<T> {
    /// Authority to match; the table default when omitted.
    #[serde(default)]
    pub authority: Option<String>,

    /// Path pattern (`*` any segment, `#` numeric segment).
    pub path: String,

    pub value: T,
}
