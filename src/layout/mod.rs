//! Pure layout math.
//!
//! Everything in this module is a deterministic function of its arguments:
//! no state, no side effects, no error conditions. The pipeline calls
//! [`row_capacity`] first to find out how many items fit in a row, then
//! [`plan_positions`] to place every item and derive the container height.

mod capacity;
mod plan;

pub use capacity::row_capacity;
pub use plan::{plan_positions, LayoutPlan};
