//! Declarations produced by the declare pass.

use almanac_types::{ParamValue, Params};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One declared page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDeclaration {
    pub page_type: String,
    pub id: Option<String>,
    pub outline: OutlineRequest,
    pub params: Params,
}

impl PageDeclaration {
    /// The stable key other pages and the outline address this page by:
    /// the slug-normalized explicit id when one was given, otherwise the
    /// page type plus a deterministic serialization of the sorted params.
    pub fn destination_key(&self) -> String {
        if let Some(id) = &self.id {
            return slug::slugify(id);
        }
        if self.params.is_empty() {
            return self.page_type.clone();
        }
        let params = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value.key_form()))
            .join(",");
        format!("{}:{}", self.page_type, params)
    }
}

/// Whether (and how) a page wants an outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutlineRequest {
    #[default]
    None,
    /// Derive a title from the page-type title lookup.
    Auto,
    Titled(String),
}

/// Consuming builder for page declarations.
#[derive(Debug, Clone)]
pub struct PageSpec {
    page_type: String,
    id: Option<String>,
    outline: OutlineRequest,
    params: Params,
}

impl PageSpec {
    pub fn new(page_type: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            id: None,
            outline: OutlineRequest::None,
            params: Params::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Request an outline entry with an auto-derived title.
    pub fn outline(mut self) -> Self {
        self.outline = OutlineRequest::Auto;
        self
    }

    pub fn outline_titled(mut self, title: impl Into<String>) -> Self {
        self.outline = OutlineRequest::Titled(title.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub(crate) fn into_declaration(self) -> PageDeclaration {
        PageDeclaration {
            page_type: self.page_type,
            id: self.id,
            outline: self.outline,
            params: self.params,
        }
    }
}

/// A named, ordered destination set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDeclaration {
    pub name: String,
    /// Destination keys in declaration order.
    pub pages: Vec<String>,
    pub cycle: bool,
}

/// One node of the declared outline forest. A node is a section iff it has
/// children; leaf entries without a resolvable destination are dropped at
/// assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub title: String,
    pub destination: Option<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Everything a declare pass records, in order.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub pages: Vec<PageDeclaration>,
    pub groups: Vec<GroupDeclaration>,
    pub outline: Vec<OutlineNode>,
}
