//! Size constraints attached to layout nodes.

use crate::node::Axis;
use serde::{Deserialize, Serialize};

/// The declared sizing of a single layout node, in grid units.
///
/// A node with a fixed `width`/`height` keeps it regardless of available
/// space; a node with a `flex` weight takes a proportional share of its
/// container's leftover space. Min/max bounds clamp whatever the node ends
/// up with: min is applied first, max last, so when the two conflict the
/// max bound wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub flex: Option<u32>,
    pub min_width: Option<i64>,
    pub min_height: Option<i64>,
    pub max_width: Option<i64>,
    pub max_height: Option<i64>,
}

impl Constraints {
    /// Resolves the node's own size against the space offered to it.
    pub fn resolve(&self, available_width: i64, available_height: i64) -> (i64, i64) {
        let width = clamp(
            self.width.unwrap_or(available_width),
            self.min_width,
            self.max_width,
        );
        let height = clamp(
            self.height.unwrap_or(available_height),
            self.min_height,
            self.max_height,
        );
        (width, height)
    }

    /// The fixed size along a container's main axis, if declared.
    pub(crate) fn main_fixed(&self, axis: Axis) -> Option<i64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The flex weight, unless a fixed main-axis size overrides it.
    pub(crate) fn main_flex(&self, axis: Axis) -> Option<u32> {
        if self.main_fixed(axis).is_some() {
            None
        } else {
            self.flex
        }
    }
}

fn clamp(value: i64, min: Option<i64>, max: Option<i64>) -> i64 {
    let mut value = value;
    if let Some(min) = min {
        value = value.max(min);
    }
    if let Some(max) = max {
        value = value.min(max);
    }
    value
}
