//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (before lookups):
//!     (authority, pattern, value)
//!     → table.rs (value → integer code, authority invariant)
//!     → matcher.rs (compile via pattern.rs, append in order)
//!
//! Lookup:
//!     Url (authority, path segments)
//!     → matcher.rs (first registration that matches → code)
//!     → table.rs (code → value, or no-match value)
//!
//! Sharing:
//!     fully built RouteTable
//!     → shared.rs (atomic publish, lock-free readers)
//! ```
//!
//! # Design Decisions
//! - First registered wins; overlapping patterns are not diagnosed
//! - The matching engine sits behind the `PathMatcher` trait
//! - Deterministic: same input always matches same route

pub mod matcher;
pub mod pattern;
pub mod shared;
pub mod table;
pub mod types;

pub use matcher::{PathMatcher, SegmentMatcher};
pub use pattern::{Authority, PathPattern, Segment};
pub use shared::SharedRouteTable;
pub use table::{RouteTable, RouteTableBuilder};
pub use types::{RouteEntry, RouteError, RouteResult};
