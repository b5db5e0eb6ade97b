//! Container height driver.
//!
//! The grid owns its container's height: the last row's bottom edge plus
//! padding. Height rides the same engine as the items but with its own
//! instant-vs-animated decision, keyed off the engine's *current* value
//! rather than the controller phase. A freshly created height reads exactly
//! 0, and animating up from 0 would play a visible grow-from-nothing on the
//! first layout.

use crate::animate::{AnimationEngine, HeightTarget};

/// Push `content_height` at the engine: immediately while the engine still
/// reads exactly 0, animated on every later change.
pub fn apply_height<E: AnimationEngine>(engine: &mut E, content_height: f64) {
    let immediate = engine.height() == 0.0;
    engine.animate_height(HeightTarget {
        height: content_height,
        immediate,
    });
}

// =============================================================================
// TESTS
// =============================================================================
