//! The per-page link resolver.

use crate::registry::{DestinationInfo, LinkRegistry};
use almanac_types::{ParamValue, Params};

/// A view of the frozen [`LinkRegistry`] scoped to the page being rendered.
///
/// Besides plain delegation it knows the page's own type and merged params,
/// which is what the relative helpers (previous/next week) navigate from.
/// Every miss is an `Option`, never an error: boundary weeks, unknown
/// groups, and unresolved keys are all expected outcomes that call sites
/// decide how to draw.
pub struct LinkResolver<'a> {
    registry: &'a LinkRegistry,
    page_type: String,
    params: Params,
}

impl<'a> LinkResolver<'a> {
    pub fn for_page(
        registry: &'a LinkRegistry,
        page_type: impl Into<String>,
        params: Params,
    ) -> Self {
        Self {
            registry,
            page_type: page_type.into(),
            params,
        }
    }

    pub fn page_type(&self) -> &str {
        &self.page_type
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The destination of the page this resolver is scoped to.
    pub fn current(&self) -> Option<&DestinationInfo> {
        self.registry.resolve(&self.page_type, &self.params)
    }

    pub fn lookup(&self, key: &str) -> Option<&DestinationInfo> {
        self.registry.lookup(key)
    }

    pub fn resolve(&self, page_type: &str, params: &Params) -> Option<&DestinationInfo> {
        self.registry.resolve(page_type, params)
    }

    pub fn next_in_cycle(&self, group: &str, current: &str) -> Option<&DestinationInfo> {
        self.registry.next_in_cycle(group, current)
    }

    /// The page `offset` weeks away from this one, resolved as a lookup on
    /// this page's own type. Misses at the first and last week instead of
    /// wrapping.
    pub fn neighbor_week(&self, offset: i64) -> Option<&DestinationInfo> {
        let (key, week) = self.params.iter().find_map(|(key, value)| match value {
            ParamValue::Week(week) => Some((key, week)),
            _ => None,
        })?;
        let mut query = Params::new();
        query.insert(key.clone(), ParamValue::int(week.number as i64 + offset));
        self.registry.resolve(&self.page_type, &query)
    }

    pub fn previous_week(&self) -> Option<&DestinationInfo> {
        self.neighbor_week(-1)
    }

    pub fn next_week(&self) -> Option<&DestinationInfo> {
        self.neighbor_week(1)
    }
}
