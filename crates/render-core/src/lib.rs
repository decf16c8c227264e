//! Core rendering abstractions for planner generation.
//!
//! This crate provides the traits the build pipeline drives and physical
//! backends implement:
//! - `DocumentSurface` for page lifecycle, drawing, and link annotations
//! - `OutlineSink` for nested bookmark emission
//! - Error types for rendering operations

mod error;
mod traits;

pub use error::RenderError;
pub use traits::{DocumentSurface, OutlineSink};
