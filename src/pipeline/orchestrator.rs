//! The build orchestrator.
//!
//! One build runs as strictly ordered phases: declare → register → render →
//! outline. No phase re-enters an earlier one, and the link registry is
//! frozen before the first page renders, so every render-time lookup sees
//! the complete destination set.

use crate::context::{merge_params, PageContext};
use crate::error::PipelineError;
use crate::events::EventSource;
use crate::registry::PageTypeRegistry;
use crate::theme::ThemeRegistry;
use almanac_compose::{Collector, ComposeError, LinkRegistry, LinkResolver, OutlineNode};
use almanac_layout::LayoutNode;
use almanac_render_core::{DocumentSurface, OutlineSink};
use almanac_types::{PageGrid, ParamValue, Params};
use log::{debug, info};
use std::time::Instant;

/// Where a pipeline is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Idle,
    Declared,
    Registered,
    Rendering,
    Outlined,
    Done,
}

/// Configures a [`DocumentPipeline`]. Registries are borrowed, constructed
/// by the caller at startup; the builder only wires them together.
pub struct PipelineBuilder<'a> {
    page_types: Option<&'a PageTypeRegistry>,
    themes: Option<&'a ThemeRegistry>,
    events: Option<&'a dyn EventSource>,
    grid: PageGrid,
    globals: Params,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new() -> Self {
        Self {
            page_types: None,
            themes: None,
            events: None,
            grid: PageGrid::default(),
            globals: Params::new(),
        }
    }

    pub fn with_page_types(mut self, page_types: &'a PageTypeRegistry) -> Self {
        self.page_types = Some(page_types);
        self
    }

    pub fn with_themes(mut self, themes: &'a ThemeRegistry) -> Self {
        self.themes = Some(themes);
        self
    }

    pub fn with_events(mut self, events: &'a dyn EventSource) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_grid(mut self, grid: PageGrid) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_global(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.globals.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<DocumentPipeline<'a>, PipelineError> {
        let page_types = self
            .page_types
            .ok_or_else(|| PipelineError::Config("a page-type registry is required".to_string()))?;
        Ok(DocumentPipeline {
            page_types,
            themes: self.themes,
            events: self.events,
            grid: self.grid,
            globals: self.globals,
            phase: BuildPhase::Idle,
        })
    }
}

impl Default for PipelineBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// The main document generation pipeline.
pub struct DocumentPipeline<'a> {
    page_types: &'a PageTypeRegistry,
    themes: Option<&'a ThemeRegistry>,
    events: Option<&'a dyn EventSource>,
    grid: PageGrid,
    globals: Params,
    phase: BuildPhase,
}

impl DocumentPipeline<'_> {
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Runs one complete build: executes `define` against a fresh
    /// collector, freezes the link registry, renders every declared page in
    /// order, then assembles the outline. Any page-builder error aborts the
    /// whole build, re-tagged with the failing page's type.
    pub fn build_document<F>(
        &mut self,
        define: F,
        surface: &mut dyn DocumentSurface,
        outline: &mut dyn OutlineSink,
    ) -> Result<(), PipelineError>
    where
        F: FnOnce(&mut Collector) -> Result<(), ComposeError>,
    {
        if self.phase != BuildPhase::Idle {
            return Err(PipelineError::Config(
                "pipeline already consumed; build a new one per document".to_string(),
            ));
        }
        let build_start = Instant::now();

        // Restores the process-wide theme selection on every exit path.
        let _theme_guard = self.themes.map(|themes| themes.snapshot());

        // --- Declare ---
        info!("[DECLARE] Running the planner definition.");
        let mut collector = Collector::with_titles(self.page_types);
        define(&mut collector)?;
        let declarations = collector.finish();
        self.phase = BuildPhase::Declared;
        info!(
            "[DECLARE] {} pages, {} groups declared.",
            declarations.pages.len(),
            declarations.groups.len()
        );

        for page in &declarations.pages {
            if !self.page_types.contains(&page.page_type) {
                return Err(PipelineError::UnknownPageType(page.page_type.clone()));
            }
        }

        // --- Register ---
        let registry = LinkRegistry::from_declarations(&declarations);
        self.phase = BuildPhase::Registered;
        info!("[REGISTER] {} destinations frozen.", registry.len());

        // The calendar collaborator runs once, before any page renders.
        let events = match self.events {
            Some(source) => source.fetch()?,
            None => Vec::new(),
        };

        // --- Render ---
        self.phase = BuildPhase::Rendering;
        for (index, page) in declarations.pages.iter().enumerate() {
            let page_number = index + 1;
            debug!("[RENDER] Page {} ({}).", page_number, page.page_type);

            let builder = self
                .page_types
                .get(&page.page_type)
                .ok_or_else(|| PipelineError::UnknownPageType(page.page_type.clone()))?;

            let destination = page.destination_key();
            surface.start_new_page()?;
            surface.named_destination(&destination)?;

            let mut layout = LayoutNode::frame();
            layout.compute_bounds(0, 0, self.grid.columns, self.grid.rows);

            let mut ctx = PageContext {
                page_number,
                page_type: &page.page_type,
                destination,
                params: merge_params(&self.globals, &page.params),
                links: LinkResolver::for_page(&registry, page.page_type.clone(), page.params.clone()),
                layout,
                grid: self.grid,
                theme: self.themes.map(|t| t.active()).unwrap_or_default(),
                events: &events,
                surface: &mut *surface,
            };
            builder
                .generate(&mut ctx)
                .map_err(|source| PipelineError::PageBuild {
                    page_type: page.page_type.clone(),
                    source: Box::new(source),
                })?;
        }

        // --- Outline ---
        emit_outline(&declarations.outline, &registry, outline);
        self.phase = BuildPhase::Outlined;
        info!(
            "[OUTLINE] {} root entries assembled.",
            declarations.outline.len()
        );

        self.phase = BuildPhase::Done;
        info!(
            "[DONE] Built {} pages in {:.2?}.",
            declarations.pages.len(),
            build_start.elapsed()
        );
        Ok(())
    }
}

/// Walks the declared outline forest, resolving destination keys to final
/// page numbers. Leaf entries that do not resolve are dropped; sections
/// survive as non-clickable headers.
fn emit_outline(nodes: &[OutlineNode], registry: &LinkRegistry, sink: &mut dyn OutlineSink) {
    for node in nodes {
        let destination = node
            .destination
            .as_deref()
            .and_then(|key| registry.lookup(key))
            .map(|dest| dest.page_number);

        if node.is_section() {
            sink.begin_section(&node.title, destination);
            emit_outline(&node.children, registry, sink);
            sink.end_section();
        } else {
            match destination {
                Some(page_number) => sink.entry(&node.title, page_number),
                None => debug!("[OUTLINE] Dropping '{}': unresolved destination.", node.title),
            }
        }
    }
}
