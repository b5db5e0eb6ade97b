//! Animation engine seam.
//!
//! spark-grid computes *where* items should go; an external spring/easing
//! engine decides *how* they get there. The pipeline talks to that engine
//! through [`AnimationEngine`], issuing one start request per item per
//! trigger plus one height request. Retargeting an in-flight animation is the
//! engine's job: last writer wins on a given item's target, nothing queues.

use crate::types::Point;

// =============================================================================
// TARGETS
// =============================================================================

/// One "start animating this item toward a target" request.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTarget<T> {
    /// Where the item should end up.
    pub position: Point,
    /// Extra start delay in milliseconds (stagger). Always 0 for instant
    /// transitions.
    pub delay: f64,
    /// Snap to the target instead of animating.
    pub immediate: bool,
    /// Caller-supplied spring/easing parameters, passed through
    /// uninterpreted.
    pub tuning: T,
}

/// The single scalar request used for container height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTarget {
    /// Height the container should grow or shrink to.
    pub height: f64,
    /// Snap instead of animating (used when the height is still at its
    /// initial 0, see [`apply_height`](crate::pipeline::height::apply_height)).
    pub immediate: bool,
}

// =============================================================================
// ENGINE
// =============================================================================

/// The external animation engine the pipeline drives.
///
/// Implementations own per-item animated (x, y) state addressable by index,
/// plus one scalar height value. The rendering layer reads live values
/// straight from the engine; spark-grid only ever writes targets.
pub trait AnimationEngine {
    /// Opaque per-item animation parameters (spring stiffness, easing curve,
    /// whatever the engine understands). Cloned into every item request.
    type Tuning: Clone;

    /// Resize the per-item animated state to exactly `count` entries.
    ///
    /// Entries at `count..` stop existing and must no longer be targeted.
    /// Newly created entries start parked at [`Point::ZERO`], so their first
    /// animated layout flies them in from the origin.
    fn set_item_count(&mut self, count: usize);

    /// Start (or retarget) the animation for one item.
    fn animate_item(&mut self, index: usize, target: ItemTarget<Self::Tuning>);

    /// Start (or retarget) the container height animation.
    fn animate_height(&mut self, target: HeightTarget);

    /// Current value of the animated height. Exactly 0.0 until the first
    /// height target lands.
    fn height(&self) -> f64;
}
