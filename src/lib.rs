//! # almanac
//!
//! Planner document generation core.
//!
//! This crate wires the workspace together:
//! - **layout**: constraint-based box layout on an abstract page grid
//! - **compose**: two-pass declaration collection and cross-page link
//!   resolution
//! - **render**: the surface and outline abstractions physical backends
//!   implement
//! - **pipeline**: the build orchestrator sequencing
//!   declare → register → render → outline
//!
//! ## Design principle
//!
//! The core is single-threaded and synchronous, and owns no wire protocol
//! or on-disk format. Everything physical (text shaping, background
//! textures, document byte encoding, calendar feeds) enters through the
//! collaborator traits: `DocumentSurface`, `OutlineSink`, `EventSource`.

// Re-export foundation crates
pub use almanac_compose as compose;
pub use almanac_layout as layout;
pub use almanac_render_core as render;
pub use almanac_types as types;

pub mod context;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod registry;
pub mod theme;

// Re-export from internal modules
pub use context::{merge_params, PageContext};
pub use error::PipelineError;
pub use events::{CalendarEvent, EventSource, NoEvents};
pub use pipeline::{BuildPhase, DocumentPipeline, PipelineBuilder};
pub use registry::{PageBuilder, PageTypeRegistry};
pub use theme::{Theme, ThemeRegistry, ThemeSnapshot};

// Re-export commonly used types from the member crates
pub use almanac_compose::{
    Collector, ComposeError, Declarations, DestinationInfo, GroupOptions, LinkRegistry,
    LinkResolver, OutlineNode, PageSpec, PageTitleSource, SectionDest,
};
pub use almanac_layout::{Axis, Constraints, GridSpec, LayoutError, LayoutNode, TrackSizing};
pub use almanac_render_core::{DocumentSurface, OutlineSink, RenderError};
pub use almanac_types::{GridRect, MonthRef, PageGrid, ParamValue, Params, WeekRef};
