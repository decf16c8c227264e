//! Integer grid-unit geometry shared across the workspace.
//!
//! All layout arithmetic happens in abstract grid units, independent of the
//! physical page size the rendering surface maps them to.

use serde::{Deserialize, Serialize};

/// A resolved bounding box on the page grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    pub col: i64,
    pub row: i64,
    pub width: i64,
    pub height: i64,
}

impl GridRect {
    pub fn new(col: i64, row: i64, width: i64, height: i64) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// First column past the right edge.
    pub fn right(&self) -> i64 {
        self.col + self.width
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> i64 {
        self.row + self.height
    }

    pub fn translated(&self, d_col: i64, d_row: i64) -> Self {
        Self {
            col: self.col + d_col,
            row: self.row + d_row,
            ..*self
        }
    }

    /// True when `other` lies entirely inside this rect.
    pub fn contains(&self, other: &GridRect) -> bool {
        other.col >= self.col
            && other.row >= self.row
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The abstract page size, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGrid {
    pub columns: i64,
    pub rows: i64,
}

impl PageGrid {
    pub fn new(columns: i64, rows: i64) -> Self {
        Self { columns, rows }
    }

    /// The full-page rect, anchored at the grid origin.
    pub fn bounds(&self) -> GridRect {
        GridRect::new(0, 0, self.columns, self.rows)
    }
}

impl Default for PageGrid {
    fn default() -> Self {
        // A comfortable default for letter-proportioned planner pages.
        Self {
            columns: 35,
            rows: 55,
        }
    }
}
