//! The two-dimensional cell generator.

use crate::node::LayoutNode;
use crate::LayoutError;
use almanac_types::GridRect;
use serde::{Deserialize, Serialize};

/// Shape of a grid node: cell counts plus independent gaps per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    pub col_gap: i64,
    pub row_gap: i64,
}

impl GridSpec {
    pub fn new(cols: usize, rows: usize) -> Result<Self, LayoutError> {
        if cols == 0 || rows == 0 {
            return Err(LayoutError::DegenerateGrid(cols, rows));
        }
        Ok(Self {
            cols,
            rows,
            col_gap: 0,
            row_gap: 0,
        })
    }

    pub fn with_gaps(mut self, col_gap: i64, row_gap: i64) -> Self {
        self.col_gap = col_gap;
        self.row_gap = row_gap;
        self
    }
}

/// Regenerates the grid's cells row-major within `bounds`.
///
/// Cell sizes floor the per-axis division; the last column and last row are
/// sized from the grid edge backwards, so the cells tile the bounds exactly
/// regardless of integer-division loss.
pub(crate) fn synthesize_cells(spec: &GridSpec, bounds: GridRect) -> Vec<LayoutNode> {
    let cols = spec.cols as i64;
    let rows = spec.rows as i64;
    let cell_w = ((bounds.width - spec.col_gap * (cols - 1)) / cols).max(0);
    let cell_h = ((bounds.height - spec.row_gap * (rows - 1)) / rows).max(0);

    let mut cells = Vec::with_capacity(spec.cols * spec.rows);
    for row_idx in 0..rows {
        for col_idx in 0..cols {
            let col_offset = col_idx * (cell_w + spec.col_gap);
            let row_offset = row_idx * (cell_h + spec.row_gap);
            let width = if col_idx == cols - 1 {
                (bounds.width - col_offset).max(0)
            } else {
                cell_w
            };
            let height = if row_idx == rows - 1 {
                (bounds.height - row_offset).max(0)
            } else {
                cell_h
            };

            let mut cell = LayoutNode::frame()
                .named(format!("r{}c{}", row_idx + 1, col_idx + 1))
                .width(width)
                .height(height);
            cell.compute_bounds(bounds.col + col_offset, bounds.row + row_offset, width, height);
            cells.push(cell);
        }
    }
    cells
}
