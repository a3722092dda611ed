//! Route table shared between threads.
//!
//! A [`RouteTable`] makes no concurrency guarantees of its own. Tables are built
//! single-threaded, then published here whole; readers never observe a table that
//! is still being populated.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use url::Url;

use crate::routing::matcher::{PathMatcher, SegmentMatcher};
use crate::routing::table::RouteTable;

/// A published, read-only route table that can be replaced atomically.
pub struct SharedRouteTable<T, M = SegmentMatcher> {
    current: ArcSwap<RouteTable<T, M>>,
}

impl<T: PartialEq, M: PathMatcher> SharedRouteTable<T, M> {
    pub fn new(table: RouteTable<T, M>) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the current table. Stays valid across later replacements.
    pub fn load(&self) -> Arc<RouteTable<T, M>> {
        self.current.load_full()
    }

    /// Match `uri` against the current table.
    pub fn match_uri(&self, uri: &Url) -> Option<T>
    where
        T: Clone,
    {
        self.current.load().match_uri(uri).cloned()
    }

    /// Publish a fully built table in place of the current one.
    pub fn replace(&self, table: RouteTable<T, M>) {
        let routes = table.len();
        self.current.store(Arc::new(table));
        tracing::info!(routes, "Route table replaced");
    }
}

impl<T: fmt::Debug, M: fmt::Debug> fmt::Debug for SharedRouteTable<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRouteTable")
            .field("current", &self.current.load_full())
            .finish()
    }
}
