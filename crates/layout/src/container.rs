//! Main-axis space distribution for container nodes.

use crate::node::{Axis, LayoutNode};
use almanac_types::GridRect;
use log::warn;

/// Allocates the container's main axis across `children` and lays each one
/// out in its slot.
///
/// Fixed-size children keep their declared size. Flex children share what
/// remains after fixed sizes and gaps, floored per child; the terminal flex
/// child (the last one carrying a flex weight) absorbs the rounding
/// remainder so the allocations plus gaps equal the available main axis
/// exactly. Children with neither get zero. The cursor advances by the
/// allocated slot, not the child's clamped size, so the fill invariant
/// survives a child's own max bounds.
pub(crate) fn distribute_children(
    children: &mut [LayoutNode],
    bounds: GridRect,
    axis: Axis,
    gap: i64,
) {
    let count = children.len() as i64;
    if count == 0 {
        return;
    }

    let available = match axis {
        Axis::Horizontal => bounds.width,
        Axis::Vertical => bounds.height,
    };

    let mut fixed_sum = 0;
    let mut flex_total: i64 = 0;
    for child in children.iter() {
        if let Some(fixed) = child.constraints.main_fixed(axis) {
            fixed_sum += fixed;
        } else if let Some(weight) = child.constraints.main_flex(axis) {
            flex_total += weight as i64;
        }
    }

    let gap_total = gap * (count - 1);
    let remaining = (available - fixed_sum - gap_total).max(0);
    if available < fixed_sum + gap_total {
        warn!(
            "container overflows its {} main axis: {} fixed + {} gaps > {} available",
            match axis {
                Axis::Horizontal => "horizontal",
                Axis::Vertical => "vertical",
            },
            fixed_sum,
            gap_total,
            available
        );
    }

    let terminal = children
        .iter()
        .rposition(|c| c.constraints.main_flex(axis).is_some());

    let mut flex_consumed = 0;
    let mut cursor = match axis {
        Axis::Horizontal => bounds.col,
        Axis::Vertical => bounds.row,
    };

    for (index, child) in children.iter_mut().enumerate() {
        let slot = if let Some(fixed) = child.constraints.main_fixed(axis) {
            fixed
        } else if let Some(weight) = child.constraints.main_flex(axis) {
            if flex_total == 0 {
                0
            } else if Some(index) == terminal {
                remaining - flex_consumed
            } else {
                let share = remaining * weight as i64 / flex_total;
                flex_consumed += share;
                share
            }
        } else {
            0
        };

        match axis {
            Axis::Horizontal => child.compute_bounds(cursor, bounds.row, slot, bounds.height),
            Axis::Vertical => child.compute_bounds(bounds.col, cursor, bounds.width, slot),
        };
        cursor += slot + gap;
    }
}
