//! Defines the unified error types for all pipeline operations.

use almanac_compose::ComposeError;
use almanac_layout::LayoutError;
use almanac_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
///
/// Link-resolution misses are deliberately not part of this taxonomy: they
/// are ordinary `Option` results that call sites handle (boundary weeks,
/// unresolved outline destinations).
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unknown page type: '{0}'")]
    UnknownPageType(String),
    #[error("Failed to build page of type '{page_type}': {source}")]
    PageBuild {
        page_type: String,
        #[source]
        source: Box<PipelineError>,
    },
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Event source error: {0}")]
    Events(String),
    #[error("Other pipeline error: {0}")]
    Other(String),
}
