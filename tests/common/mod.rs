//! Shared fixtures for integration tests.

use typed_uri_matcher::RouteTable;
use url::Url;

pub const AUTHORITY: &str = "authority";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Foos,
    Foo,
    Bars,
    NoMatch,
}

pub const ALL: [MatchType; 4] = [
    MatchType::Foos,
    MatchType::Foo,
    MatchType::Bars,
    MatchType::NoMatch,
];

/// `foos`, `foos/#` and `bars` under the default authority, in that order.
pub fn sample_table() -> RouteTable<MatchType> {
    let mut table = RouteTable::with_default_authority(ALL, AUTHORITY);
    table.add_default_route("foos", MatchType::Foos).unwrap();
    table.add_default_route("foos/#", MatchType::Foo).unwrap();
    table.add_default_route("bars", MatchType::Bars).unwrap();
    table
}

pub fn content_uri(path: &str) -> Url {
    Url::parse(&format!("content://{}/{}", AUTHORITY, path)).unwrap()
}
