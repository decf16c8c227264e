use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Track sizing needs exactly one of a count or an explicit size list.")]
    AmbiguousTracks,
    #[error("A repeating node needs at least one track.")]
    EmptyTracks,
    #[error("Grid needs at least one column and one row, got {0}x{1}.")]
    DegenerateGrid(usize, usize),
}

pub mod constraints;
pub mod container;
pub mod grid;
pub mod node;
pub mod tracks;

pub use self::constraints::Constraints;
pub use self::grid::GridSpec;
pub use self::node::{Axis, LayoutNode, NodeKind};
pub use self::tracks::TrackSizing;

// Re-export geometry types used by nodes from base to prevent type mismatches
pub use almanac_types::{GridRect, PageGrid};
