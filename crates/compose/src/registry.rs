//! The frozen destination registry.

use crate::declare::{Declarations, GroupDeclaration, PageDeclaration};
use almanac_types::{ParamValue, Params};
use log::warn;
use std::collections::HashMap;

/// Everything the link layer knows about one registered page. Created
/// exactly once, at registration, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationInfo {
    pub key: String,
    /// 1-based position in the final render order.
    pub page_number: usize,
    pub page_type: String,
    pub params: Params,
}

#[derive(Debug, Default)]
struct GroupEntry {
    keys: Vec<String>,
    cycle: bool,
}

/// Maps declared pages to destinations. Built once per build, immediately
/// after the declare pass and before any page renders, so render-time
/// lookups always see the complete set.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    destinations: Vec<DestinationInfo>,
    by_key: HashMap<String, usize>,
    by_type: HashMap<String, Vec<usize>>,
    groups: HashMap<String, GroupEntry>,
}

impl LinkRegistry {
    /// Builds the registry from a completed declare pass: every page gets
    /// its 1-based declaration position as its page number.
    pub fn from_declarations(decls: &Declarations) -> Self {
        let mut registry = Self::default();
        for (index, page) in decls.pages.iter().enumerate() {
            registry.register(page, index + 1);
        }
        for group in &decls.groups {
            registry.register_group(group);
        }
        registry
    }

    /// Registers one page under its destination key and type bucket. A
    /// duplicate key keeps the first registration.
    pub fn register(&mut self, decl: &PageDeclaration, page_number: usize) {
        let key = decl.destination_key();
        if self.by_key.contains_key(&key) {
            warn!(
                "duplicate destination key '{}' (page {}), keeping the first registration",
                key, page_number
            );
            return;
        }
        let index = self.destinations.len();
        self.destinations.push(DestinationInfo {
            key: key.clone(),
            page_number,
            page_type: decl.page_type.clone(),
            params: decl.params.clone(),
        });
        self.by_key.insert(key, index);
        self.by_type
            .entry(decl.page_type.clone())
            .or_default()
            .push(index);
    }

    pub fn register_group(&mut self, group: &GroupDeclaration) {
        self.groups.insert(
            group.name.clone(),
            GroupEntry {
                keys: group.pages.clone(),
                cycle: group.cycle,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Exact destination-key lookup.
    pub fn lookup(&self, key: &str) -> Option<&DestinationInfo> {
        self.by_key.get(key).map(|&index| &self.destinations[index])
    }

    /// Resolves a page reference. With no params this is an exact-key
    /// lookup on the bare type key; otherwise the first destination of the
    /// type whose params are compatible with the query, in registration
    /// order.
    pub fn resolve(&self, page_type: &str, params: &Params) -> Option<&DestinationInfo> {
        if params.is_empty() {
            return self.lookup(page_type);
        }
        self.by_type
            .get(page_type)?
            .iter()
            .map(|&index| &self.destinations[index])
            .find(|dest| params_match(&dest.params, params))
    }

    /// Advances through a group's fixed registration-order list, wrapping
    /// past the end. An unknown `current` falls back to the first entry; an
    /// unknown or empty group is a miss.
    pub fn next_in_cycle(&self, group: &str, current: &str) -> Option<&DestinationInfo> {
        let entry = self.groups.get(group)?;
        if entry.keys.is_empty() {
            return None;
        }
        let next_key = match entry.keys.iter().position(|key| key == current) {
            Some(position) => &entry.keys[(position + 1) % entry.keys.len()],
            None => &entry.keys[0],
        };
        self.lookup(next_key)
    }

    /// Whether a group was declared with the cycle flag.
    pub fn is_cycle(&self, group: &str) -> bool {
        self.groups.get(group).is_some_and(|entry| entry.cycle)
    }
}

/// Every query key must be present and compatible in the stored params.
fn params_match(stored: &Params, query: &Params) -> bool {
    query
        .iter()
        .all(|(key, value)| stored.get(key).is_some_and(|s| values_compatible(s, value)))
}

/// Equal values match; a stored week/month ref also matches an integer
/// query via its numeric identity. Anything else is type-exact.
fn values_compatible(stored: &ParamValue, query: &ParamValue) -> bool {
    if stored == query {
        return true;
    }
    match (stored, query) {
        (ParamValue::Week(week), ParamValue::Plain(value)) => {
            value.as_i64() == Some(week.number as i64)
        }
        (ParamValue::Month(month), ParamValue::Plain(value)) => {
            value.as_i64() == Some(month.number as i64)
        }
        _ => false,
    }
}
