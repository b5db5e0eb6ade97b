//! Relayout pipeline.
//!
//! Wires the pure layout math to the outside world:
//!
//! ```text
//! size change → row_capacity → plan_positions → {item targets + stagger delays}
//!                                             → container height target
//! ```
//!
//! ## Data Flow
//!
//! 1. **relayout** - One trigger, one pass: a width snapshot goes in, item
//!    targets and a height target come out, strictly in that order.
//! 2. **height** - The container's own instant-vs-animated decision.
//! 3. **mount** - Subscribes the controller to a size observer and hands back
//!    the session handle that owns cleanup.
//!
//! Side effects stay at the engine seam; everything before the target
//! issuance is pure computation.

pub mod height;
pub mod mount;
pub mod relayout;

#[cfg(test)]
pub(crate) mod harness;

// Re-exports
pub use height::apply_height;
pub use mount::{mount, unmount, GridHandle};
pub use relayout::{stagger_delay, GridController, LayoutPhase};
