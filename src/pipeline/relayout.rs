//! Relayout control loop.
//!
//! One trigger = one pass: a width snapshot goes in, targets come out. The
//! controller is deliberately not debounced - rapid resize bursts each
//! produce a full recomputation, and the engine retargets in-flight springs
//! (last writer wins).

use spark_signals::{signal, Signal};
use tracing::{debug, trace};

use super::height::apply_height;
use crate::animate::{AnimationEngine, ItemTarget};
use crate::layout::{plan_positions, row_capacity, LayoutPlan};
use crate::options::{GridOptions, OptionsError};

// =============================================================================
// PHASE
// =============================================================================

/// Where the controller is in its lifecycle.
///
/// The phase flips on the first completed pass and never goes back; only that
/// first pass (or a static launch against a still-unmeasured container) snaps
/// items into place without animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPhase {
    /// No layout has been computed yet.
    Uninitialized,
    /// At least one pass has completed; transitions animate from here on.
    Initialized,
}

// =============================================================================
// STAGGER
// =============================================================================

/// Per-item start delay for a cascading transition.
///
/// Non-negative intervals ramp up from the first item: `index * interval`.
/// Negative intervals keep the literal `count * interval + index * interval`
/// schedule - a reversed, shifted ramp whose magnitude *decreases* with the
/// index. Odd, but intentional: callers rely on the exact sequence.
pub fn stagger_delay(index: usize, count: usize, interval: f64) -> f64 {
    if interval >= 0.0 {
        index as f64 * interval
    } else {
        count as f64 * interval + index as f64 * interval
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Stateful orchestrator for one grid session.
///
/// Owns the animation engine and everything needed to answer "where should
/// every item be right now, and how should it get there": the options, the
/// opaque tuning value, the phase machine, and the last width snapshot.
///
/// [`mount`](crate::pipeline::mount::mount) wires a controller to a
/// [`SizeObserver`](crate::observe::SizeObserver); hosts without a
/// subscription mechanism can drive [`relayout`](GridController::relayout)
/// directly.
pub struct GridController<E: AnimationEngine> {
    options: GridOptions,
    tuning: E::Tuning,
    engine: E,
    item_count: usize,
    phase: LayoutPhase,
    last_width: Option<f64>,
    plan: Signal<Option<LayoutPlan>>,
}

impl<E: AnimationEngine> GridController<E> {
    /// Create a controller and seed the engine's per-item state.
    ///
    /// `last_width` seeds the static-launch predicate: pass the observer's
    /// reading from just before the first trigger, or `None` when the
    /// container has never been measured.
    pub fn new(
        options: GridOptions,
        tuning: E::Tuning,
        mut engine: E,
        item_count: usize,
        last_width: Option<f64>,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        engine.set_item_count(item_count);

        Ok(Self {
            options,
            tuning,
            engine,
            item_count,
            phase: LayoutPhase::Uninitialized,
            last_width,
            plan: signal(None),
        })
    }

    /// The configuration this session was created with.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Number of items currently managed.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Latest computed plan, `None` until the first completed pass.
    ///
    /// Replaced wholesale at the end of every pass, after all targets have
    /// been issued.
    pub fn plan_signal(&self) -> Signal<Option<LayoutPlan>> {
        self.plan.clone()
    }

    /// Replace the managed item count and recompute with the given snapshot.
    ///
    /// A no-op when the count is unchanged. Otherwise the engine's item state
    /// is resized first (new items park at the origin, removed indices stop
    /// being targeted), then a full pass runs.
    pub fn set_item_count(&mut self, count: usize, measured_width: Option<f64>) {
        if count == self.item_count {
            return;
        }

        self.engine.set_item_count(count);
        self.item_count = count;
        self.relayout(measured_width);
    }

    /// One full pass: capacity → plan → item targets → height target.
    ///
    /// `measured_width` is this trigger's one snapshot of the container's
    /// outer width; it is never re-read mid-pass. `None` (unmeasured)
    /// degrades to the one-column floor rather than failing.
    pub fn relayout(&mut self, measured_width: Option<f64>) {
        if self.item_count == 0 {
            // No last item to derive a height from. Leave every prior
            // target, the phase, and the last width untouched.
            trace!("relayout skipped: no items");
            return;
        }

        let width = measured_width.unwrap_or(0.0);
        let inner_width = self.options.inner_width(width);
        let per_row = row_capacity(inner_width, self.options.item_width, self.options.column_gap);
        let plan = plan_positions(self.item_count, per_row, &self.options);

        let static_launch = self.options.static_launch && self.last_width.is_none();
        let instant = self.phase == LayoutPhase::Uninitialized || static_launch;

        debug!(
            width,
            per_row,
            count = self.item_count,
            instant,
            "relayout"
        );

        for (index, position) in plan.positions.iter().enumerate() {
            let delay = if instant {
                0.0
            } else {
                stagger_delay(index, self.item_count, self.options.interval)
            };
            trace!(index, x = position.x, y = position.y, delay, "item target");
            self.engine.animate_item(
                index,
                ItemTarget {
                    position: *position,
                    delay,
                    immediate: instant,
                    tuning: self.tuning.clone(),
                },
            );
        }

        // All item targets first, then the height target.
        apply_height(&mut self.engine, plan.content_height);

        self.phase = LayoutPhase::Initialized;
        self.last_width = measured_width;
        self.plan.set(Some(plan));
    }
}

// =============================================================================
// TESTS
// =============================================================================
