//! Typed URI route table.
//!
//! Associates `(authority, path pattern)` registrations with values of a caller's
//! type instead of raw integer codes, and resolves URIs against them in
//! registration order.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouteTableConfig;
pub use routing::{PathMatcher, RouteError, RouteTable, SegmentMatcher, SharedRouteTable};
