//! Track sizing for the repeating columns/rows generators.

use crate::node::{Axis, LayoutNode};
use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// How a columns/rows node slices its main axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackSizing {
    /// N equal tracks; the last absorbs the division remainder.
    Count(usize),
    /// Explicit track sizes, used verbatim.
    Sizes(Vec<i64>),
}

impl TrackSizing {
    /// Builds a sizing from the mutually-exclusive constructor arguments.
    pub fn from_options(
        count: Option<usize>,
        sizes: Option<Vec<i64>>,
    ) -> Result<Self, LayoutError> {
        let sizing = match (count, sizes) {
            (Some(count), None) => TrackSizing::Count(count),
            (None, Some(sizes)) => TrackSizing::Sizes(sizes),
            _ => return Err(LayoutError::AmbiguousTracks),
        };
        sizing.validate()?;
        Ok(sizing)
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        let empty = match self {
            TrackSizing::Count(count) => *count == 0,
            TrackSizing::Sizes(sizes) => sizes.is_empty(),
        };
        if empty {
            Err(LayoutError::EmptyTracks)
        } else {
            Ok(())
        }
    }

    /// Concrete track sizes for the given main-axis extent.
    fn resolve(&self, available: i64, gap: i64) -> Vec<i64> {
        match self {
            TrackSizing::Sizes(sizes) => sizes.clone(),
            TrackSizing::Count(count) => {
                let count = *count as i64;
                let inner = (available - gap * (count - 1)).max(0);
                let base = inner / count;
                let mut sizes = vec![base; count as usize];
                // Route the whole division remainder to the last track.
                if let Some(last) = sizes.last_mut() {
                    *last = inner - base * (count - 1);
                }
                sizes
            }
        }
    }
}

/// Regenerates the synthetic children of a columns/rows node. Each child is
/// a fixed-size frame, so the container pass places the tracks verbatim.
pub(crate) fn synthesize(tracks: &TrackSizing, available: i64, gap: i64, axis: Axis) -> Vec<LayoutNode> {
    let prefix = match axis {
        Axis::Horizontal => "col",
        Axis::Vertical => "row",
    };
    tracks
        .resolve(available, gap)
        .into_iter()
        .enumerate()
        .map(|(index, size)| {
            let frame = LayoutNode::frame().named(format!("{}{}", prefix, index + 1));
            match axis {
                Axis::Horizontal => frame.width(size),
                Axis::Vertical => frame.height(size),
            }
        })
        .collect()
}
