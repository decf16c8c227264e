//! The page-builder registry.
//!
//! An explicit registry object constructed once at startup and passed by
//! reference into the orchestrator, for deterministic lifecycle and test
//! isolation. Type tags map to boxed builders; the registry doubles as the
//! declaration collector's title source.

use crate::context::PageContext;
use crate::error::PipelineError;
use almanac_compose::PageTitleSource;
use almanac_types::Params;
use std::collections::HashMap;

/// Content builder for one page type.
pub trait PageBuilder {
    /// Draws one page into the context's surface, navigating the context's
    /// layout tree and link resolver.
    fn generate(&self, ctx: &mut PageContext) -> Result<(), PipelineError>;

    /// Optional human-readable outline title for a page of this type.
    fn title(&self, _params: &Params) -> Option<String> {
        None
    }
}

#[derive(Default)]
pub struct PageTypeRegistry {
    builders: HashMap<String, Box<dyn PageBuilder>>,
}

impl PageTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, page_type: impl Into<String>, builder: impl PageBuilder + 'static) {
        self.builders.insert(page_type.into(), Box::new(builder));
    }

    pub fn get(&self, page_type: &str) -> Option<&dyn PageBuilder> {
        self.builders.get(page_type).map(|b| b.as_ref())
    }

    pub fn contains(&self, page_type: &str) -> bool {
        self.builders.contains_key(page_type)
    }
}

impl PageTitleSource for PageTypeRegistry {
    fn title_for(&self, page_type: &str, params: &Params) -> Option<String> {
        self.get(page_type).and_then(|builder| builder.title(params))
    }
}
