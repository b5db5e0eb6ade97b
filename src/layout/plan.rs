//! Position planning - row-major placement of fixed-size items.

use crate::options::GridOptions;
use crate::types::Point;

/// The full placement for the current item count.
///
/// A plan is replaced wholesale on every recomputation and never partially
/// mutated, so a reader always sees positions and height from the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    /// Top-left target for every item, in item order.
    pub positions: Vec<Point>,
    /// Vertical space the rows occupy, including both paddings.
    pub content_height: f64,
}

/// Place `count` items row-major, `per_row` to a row.
///
/// `x` walks columns left to right, `y` walks rows top to bottom. The content
/// height comes from the final item's row rather than a row count, which
/// stays correct when the last row is partial.
///
/// Only the dimension fields of `options` are read. `count` must be at least
/// 1: with no last item there is no height to derive, and the zero-item case
/// is the pipeline's to skip.
pub fn plan_positions(count: usize, per_row: usize, options: &GridOptions) -> LayoutPlan {
    debug_assert!(count >= 1, "plan_positions requires at least one item");
    debug_assert!(per_row >= 1, "row capacity is always at least 1");

    let mut positions = Vec::with_capacity(count);
    for index in 0..count {
        let row = (index / per_row) as f64;
        let column = (index % per_row) as f64;
        positions.push(Point::new(
            column * options.item_width + column * options.column_gap + options.padding,
            row * options.item_height + row * options.row_gap + options.padding,
        ));
    }

    let last_y = positions[count - 1].y;
    LayoutPlan {
        positions,
        content_height: last_y + options.item_height + options.padding,
    }
}

// =============================================================================
// TESTS
// =============================================================================
