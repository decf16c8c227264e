use crate::error::RenderError;
use almanac_types::GridRect;

/// The physical drawing collaborator, abstracting the document backend.
///
/// All geometry arrives in grid units; mapping them to physical coordinates
/// (and everything about text shaping, fonts, and byte encoding) is the
/// implementation's business.
pub trait DocumentSurface {
    fn start_new_page(&mut self) -> Result<(), RenderError>;

    /// Stamps a named background texture (dots, grid, hex, ...) over an
    /// area of the open page.
    fn stamp_background(&mut self, pattern: &str, bounds: GridRect) -> Result<(), RenderError>;

    fn draw_text(&mut self, bounds: GridRect, text: &str) -> Result<(), RenderError>;

    fn draw_frame(&mut self, bounds: GridRect) -> Result<(), RenderError>;

    /// Registers the open page as the target of `key`.
    fn named_destination(&mut self, key: &str) -> Result<(), RenderError>;

    /// Makes an area of the open page jump to a named destination.
    fn link_annotation(&mut self, bounds: GridRect, destination: &str)
    -> Result<(), RenderError>;
}

/// Receives the assembled bookmark tree, keyed by 1-based page numbers.
///
/// Sections arrive as balanced `begin_section`/`end_section` pairs around
/// their children; a section's own destination is optional (non-clickable
/// headers are legal), a leaf entry's is not.
pub trait OutlineSink {
    fn begin_section(&mut self, title: &str, destination: Option<usize>);

    fn end_section(&mut self);

    fn entry(&mut self, title: &str, destination: usize);
}
