//! Typed route table.
//!
//! # Responsibilities
//! - Translate result values to integer codes for the matcher
//! - Enforce the non-empty authority invariant on registration
//! - Translate matched codes back to values, or the no-match value
//!
//! # Design Decisions
//! - The set of result values is supplied up front and fixed for the table's lifetime
//! - A value's position in that set is its code
//! - Configuration setters are not retroactive

use std::fmt;

use url::Url;

use crate::config::schema::RouteTableConfig;
use crate::routing::matcher::{PathMatcher, SegmentMatcher};
use crate::routing::types::{RouteEntry, RouteError, RouteResult};

/// Associates URI patterns with values of `T`.
///
/// ```
/// use typed_uri_matcher::RouteTable;
/// use url::Url;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Match {
///     Foos,
///     Foo,
/// }
///
/// let mut table = RouteTable::with_default_authority([Match::Foos, Match::Foo], "authority");
/// table.add_default_route("foos", Match::Foos).unwrap();
/// table.add_default_route("foos/#", Match::Foo).unwrap();
///
/// let uri = Url::parse("content://authority/foos/1").unwrap();
/// assert_eq!(table.match_uri(&uri), Some(&Match::Foo));
/// ```
pub struct RouteTable<T, M = SegmentMatcher> {
    matcher: M,
    values: Vec<T>,
    routes: Vec<RouteEntry<T>>,
    default_authority: Option<String>,
    no_match: Option<T>,
}

impl<T: PartialEq> RouteTable<T> {
    /// Create a table with no default authority and an absent no-match value.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self::builder(values).build()
    }

    /// Create a table that returns `no_match` when nothing matches.
    pub fn with_no_match(values: impl IntoIterator<Item = T>, no_match: T) -> Self {
        Self::builder(values).no_match(no_match).build()
    }

    /// Create a table whose authority-less registrations use `authority`.
    pub fn with_default_authority(
        values: impl IntoIterator<Item = T>,
        authority: impl Into<String>,
    ) -> Self {
        Self::builder(values).default_authority(authority).build()
    }

    pub fn builder(values: impl IntoIterator<Item = T>) -> RouteTableBuilder<T> {
        RouteTableBuilder {
            values: values.into_iter().collect(),
            matcher: SegmentMatcher::new(),
            default_authority: None,
            no_match: None,
        }
    }

    /// Build a table from configuration, registering routes in file order.
    pub fn from_config(
        values: impl IntoIterator<Item = T>,
        config: RouteTableConfig<T>,
    ) -> RouteResult<Self> {
        let mut builder = Self::builder(values);
        if let Some(authority) = config.default_authority {
            builder = builder.default_authority(authority);
        }
        if let Some(no_match) = config.no_match {
            builder = builder.no_match(no_match);
        }
        let mut table = builder.build();

        for route in config.routes {
            match route.authority {
                Some(authority) => table.add_route(&authority, &route.path, route.value)?,
                None => table.add_default_route(&route.path, route.value)?,
            }
        }

        tracing::debug!(routes = table.len(), "Route table built from config");
        Ok(table)
    }
}

impl<T: PartialEq + Clone> RouteTable<T> {
    /// Build a table whose values are those named in `config`, in first-seen order.
    pub fn from_config_values(config: RouteTableConfig<T>) -> RouteResult<Self> {
        let mut values: Vec<T> = Vec::new();
        let named = config
            .routes
            .iter()
            .map(|route| &route.value)
            .chain(config.no_match.as_ref());
        for value in named {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        Self::from_config(values, config)
    }
}

impl<T: PartialEq, M: PathMatcher> RouteTable<T, M> {
    /// Create a table backed by a custom matching engine.
    pub fn with_matcher(values: impl IntoIterator<Item = T>, matcher: M) -> Self {
        RouteTable::<T>::builder(values).matcher(matcher).build()
    }

    /// Register `pattern` under `authority`, reported as `value` when matched.
    pub fn add_route(&mut self, authority: &str, pattern: &str, value: T) -> RouteResult<()> {
        if authority.is_empty() {
            tracing::warn!(pattern, "Rejected route with empty authority");
            return Err(RouteError::EmptyAuthority {
                pattern: pattern.to_string(),
            });
        }

        let code = self.code_of(&value).ok_or_else(|| {
            tracing::warn!(authority, pattern, "Rejected route with unknown value");
            RouteError::UnknownValue {
                pattern: pattern.to_string(),
            }
        })?;

        self.matcher.register(authority, pattern, code);
        self.routes.push(RouteEntry {
            authority: authority.to_string(),
            pattern: pattern.to_string(),
            value,
        });

        tracing::debug!(authority, pattern, code, "Route registered");
        Ok(())
    }

    /// Register `pattern` under the default authority.
    ///
    /// Fails with [`RouteError::MissingDefaultAuthority`] if none is set.
    pub fn add_default_route(&mut self, pattern: &str, value: T) -> RouteResult<()> {
        let Some(authority) = self.default_authority.clone() else {
            tracing::warn!(pattern, "Rejected route: no default authority");
            return Err(RouteError::MissingDefaultAuthority);
        };
        self.add_route(&authority, pattern, value)
    }

    /// Returns the value of the first route matching `uri`, or the no-match value.
    pub fn match_uri(&self, uri: &Url) -> Option<&T> {
        match self.matcher.lookup(uri).and_then(|code| self.values.get(code)) {
            Some(value) => {
                tracing::trace!(uri = %uri, "Route matched");
                Some(value)
            }
            None => {
                tracing::trace!(uri = %uri, "No route matched");
                self.no_match.as_ref()
            }
        }
    }

    /// Like [`match_uri`](Self::match_uri), but an absent URI yields `None`
    /// without consulting the table.
    pub fn match_opt(&self, uri: Option<&Url>) -> Option<&T> {
        uri.and_then(|uri| self.match_uri(uri))
    }

    /// Parse `uri` and match it.
    pub fn match_str(&self, uri: &str) -> RouteResult<Option<&T>> {
        let uri = Url::parse(uri)?;
        Ok(self.match_uri(&uri))
    }

    /// Set the authority used by later [`add_default_route`](Self::add_default_route) calls.
    pub fn set_default_authority(&mut self, authority: impl Into<String>) {
        self.default_authority = Some(authority.into());
    }

    pub fn clear_default_authority(&mut self) {
        self.default_authority = None;
    }

    /// Set the value returned by later lookups that match nothing.
    pub fn set_no_match_value(&mut self, value: Option<T>) {
        self.no_match = value;
    }

    pub fn default_authority(&self) -> Option<&str> {
        self.default_authority.as_deref()
    }

    pub fn no_match_value(&self) -> Option<&T> {
        self.no_match.as_ref()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> &[RouteEntry<T>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn code_of(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|candidate| candidate == value)
    }
}

impl<T: fmt::Debug, M: fmt::Debug> fmt::Debug for RouteTable<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .field("default_authority", &self.default_authority)
            .field("no_match", &self.no_match)
            .field("matcher", &self.matcher)
            .finish()
    }
}

/// Builder covering every combination of table settings.
#[derive(Debug)]
pub struct RouteTableBuilder<T, M = SegmentMatcher> {
    values: Vec<T>,
    matcher: M,
    default_authority: Option<String>,
    no_match: Option<T>,
}

impl<T, M: PathMatcher> RouteTableBuilder<T, M> {
    pub fn default_authority(mut self, authority: impl Into<String>) -> Self {
        self.default_authority = Some(authority.into());
        self
    }

    pub fn no_match(mut self, value: T) -> Self {
        self.no_match = Some(value);
        self
    }

    /// Swap in a different matching engine.
    pub fn matcher<N: PathMatcher>(self, matcher: N) -> RouteTableBuilder<T, N> {
        RouteTableBuilder {
            values: self.values,
            matcher,
            default_authority: self.default_authority,
            no_match: self.no_match,
        }
    }

    pub fn build(self) -> RouteTable<T, M> {
        RouteTable {
            matcher: self.matcher,
            values: self.values,
            routes: Vec::new(),
            default_authority: self.default_authority,
            no_match: self.no_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    const AUTHORITY: &str = "authority";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MatchType {
        Foos,
        Foo,
        Bars,
        Unknown,
    }

    const ALL: [MatchType; 4] = [MatchType::Foos, MatchType::Foo, MatchType::Bars, MatchType::Unknown];

    fn uri(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn sample_table() -> RouteTable<MatchType> {
        let mut table = RouteTable::with_default_authority(ALL, AUTHORITY);
        table.add_default_route("foos", MatchType::Foos).unwrap();
        table.add_default_route("foos/#", MatchType::Foo).unwrap();
        table.add_default_route("bars", MatchType::Bars).unwrap();
        table
    }

    #[test]
    fn test_add_route_without_authority() {
        let mut table = RouteTable::new(ALL);
        let result = table.add_default_route("path", MatchType::Foo);
        assert_eq!(result, Err(RouteError::MissingDefaultAuthority));
        assert!(table.is_empty());
    }

    #[test]
    fn test_match() {
        let table = sample_table();
        assert_eq!(table.match_uri(&uri("content://authority/foos")), Some(&MatchType::Foos));
        assert_eq!(table.match_uri(&uri("content://authority/foos/1")), Some(&MatchType::Foo));
        assert_eq!(table.match_uri(&uri("content://authority/bars")), Some(&MatchType::Bars));
        assert_eq!(table.match_uri(&uri("content://authority/unknown")), None);
    }

    #[test]
    fn test_no_match_value() {
        let mut table = sample_table();
        table.set_no_match_value(Some(MatchType::Unknown));
        assert_eq!(
            table.match_uri(&uri("content://authority/unknown")),
            Some(&MatchType::Unknown)
        );

        table.set_no_match_value(None);
        assert_eq!(table.match_uri(&uri("content://authority/unknown")), None);
    }

    #[test]
    fn test_absent_uri() {
        let table = RouteTable::builder(ALL)
            .default_authority(AUTHORITY)
            .no_match(MatchType::Unknown)
            .build();
        assert_eq!(table.match_opt(None), None);
        assert_eq!(
            table.match_opt(Some(&uri("content://authority/x"))),
            Some(&MatchType::Unknown)
        );
    }

    #[test]
    fn test_explicit_authority() {
        let mut table = RouteTable::new(ALL);
        table.add_route("other", "bars", MatchType::Bars).unwrap();
        assert_eq!(table.match_uri(&uri("content://other/bars")), Some(&MatchType::Bars));
        assert_eq!(table.match_uri(&uri("content://authority/bars")), None);
    }

    #[test]
    fn test_empty_authority_rejected() {
        let mut table = RouteTable::new(ALL);
        let result = table.add_route("", "bars", MatchType::Bars);
        assert!(matches!(result, Err(RouteError::EmptyAuthority { .. })));
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_value_rejected() {
        let mut table = RouteTable::with_default_authority([MatchType::Foos], AUTHORITY);
        let result = table.add_default_route("bars", MatchType::Bars);
        assert!(matches!(result, Err(RouteError::UnknownValue { .. })));
        assert!(table.is_empty());
        assert_eq!(table.match_uri(&uri("content://authority/bars")), None);
    }

    #[test]
    fn test_default_authority_not_retroactive() {
        let mut table = sample_table();
        table.set_default_authority("second");
        table.add_default_route("bars", MatchType::Foos).unwrap();

        assert_eq!(table.match_uri(&uri("content://authority/bars")), Some(&MatchType::Bars));
        assert_eq!(table.match_uri(&uri("content://second/bars")), Some(&MatchType::Foos));
        assert_eq!(table.routes()[0].authority, AUTHORITY);
    }

    #[test]
    fn test_cleared_default_authority() {
        let mut table = sample_table();
        table.clear_default_authority();
        assert_eq!(
            table.add_default_route("other", MatchType::Foo),
            Err(RouteError::MissingDefaultAuthority)
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.match_uri(&uri("content://authority/foos")), Some(&MatchType::Foos));
    }

    #[test]
    fn test_match_str() {
        let table = sample_table();
        assert_eq!(
            table.match_str("content://authority/foos/9").unwrap(),
            Some(&MatchType::Foo)
        );
        assert!(matches!(table.match_str("foos/9"), Err(RouteError::InvalidUri(_))));
    }

    #[test]
    fn test_custom_matcher() {
        #[derive(Debug)]
        struct Always(usize);

        impl PathMatcher for Always {
            fn register(&mut self, _authority: &str, _pattern: &str, _code: usize) {}

            fn lookup(&self, _uri: &Url) -> Option<usize> {
                Some(self.0)
            }
        }

        let table = RouteTable::with_matcher(ALL, Always(2));
        assert_eq!(table.match_uri(&uri("content://x/y")), Some(&MatchType::Bars));

        // Codes outside the value set fall back to the no-match value.
        let table = RouteTable::builder(ALL)
            .no_match(MatchType::Unknown)
            .matcher(Always(99))
            .build();
        assert_eq!(table.match_uri(&uri("content://x/y")), Some(&MatchType::Unknown));
    }

    #[test]
    fn test_from_config() {
        let config = RouteTableConfig {
            default_authority: Some(AUTHORITY.to_string()),
            no_match: Some(MatchType::Unknown),
            routes: vec![
                RouteConfig {
                    authority: None,
                    path: "foos".into(),
                    value: MatchType::Foos,
                },
                RouteConfig {
                    authority: Some("other".into()),
                    path: "bars/*".into(),
                    value: MatchType::Bars,
                },
            ],
        };

        let table = RouteTable::from_config(ALL, config).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.match_uri(&uri("content://authority/foos")), Some(&MatchType::Foos));
        assert_eq!(table.match_uri(&uri("content://other/bars/x")), Some(&MatchType::Bars));
        assert_eq!(table.match_uri(&uri("content://other/foos")), Some(&MatchType::Unknown));
    }

    #[test]
    fn test_from_config_values_first_seen_order() {
        let config = RouteTableConfig {
            default_authority: Some(AUTHORITY.to_string()),
            no_match: Some("none".to_string()),
            routes: vec![
                RouteConfig {
                    authority: None,
                    path: "b".into(),
                    value: "second".to_string(),
                },
                RouteConfig {
                    authority: None,
                    path: "a".into(),
                    value: "first".to_string(),
                },
                RouteConfig {
                    authority: None,
                    path: "c".into(),
                    value: "second".to_string(),
                },
            ],
        };

        let table = RouteTable::from_config_values(config).unwrap();
        assert_eq!(table.values(), &["second", "first", "none"]);
        assert_eq!(
            table.match_str("content://authority/c").unwrap().map(String::as_str),
            Some("second")
        );
    }
}
