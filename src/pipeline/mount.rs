//! Mount API - grid session lifecycle.
//!
//! [`mount`] validates the options, wires a [`GridController`] to a size
//! observer, fires the first layout pass, and returns a [`GridHandle`] that
//! owns the subscription.
//!
//! # Example
//!
//! ```ignore
//! use spark_grid::{mount, ContainerSize, GridOptions};
//!
//! let size = ContainerSize::new();
//! let handle = mount(options, tuning, engine, 12, size.clone())?;
//!
//! // The host reports measurements; every change re-plans and re-targets.
//! size.set_width(1000.0);
//! size.set_width(640.0);
//!
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::Signal;

use super::relayout::GridController;
use crate::animate::AnimationEngine;
use crate::layout::LayoutPlan;
use crate::observe::SizeObserver;
use crate::options::{GridOptions, OptionsError};

// =============================================================================
// Grid Handle
// =============================================================================

/// Handle returned by [`mount`] that keeps the session alive.
///
/// Dropping the handle releases the size subscription. In-flight animations
/// are not cancelled - finishing or abandoning them is the engine's own
/// lifecycle.
pub struct GridHandle<E: AnimationEngine, O: SizeObserver> {
    controller: Rc<RefCell<GridController<E>>>,
    observer: O,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl<E: AnimationEngine, O: SizeObserver> GridHandle<E, O> {
    /// Latest computed plan (targets plus content height), `None` until the
    /// first completed pass.
    pub fn plan_signal(&self) -> Signal<Option<LayoutPlan>> {
        self.controller.borrow().plan_signal()
    }

    /// Number of items currently managed.
    pub fn item_count(&self) -> usize {
        self.controller.borrow().item_count()
    }

    /// Change the number of managed items and re-plan immediately.
    ///
    /// Items beyond the new count stop being targeted; new items start at
    /// the origin and animate to their first planned position.
    pub fn set_item_count(&self, count: usize) {
        let width = self.observer.measure();
        self.controller.borrow_mut().set_item_count(count, width);
    }

    /// Release the size subscription.
    pub fn unmount(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl<E: AnimationEngine, O: SizeObserver> Drop for GridHandle<E, O> {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount a grid session.
///
/// This:
/// 1. validates `options` (rejecting before any layout begins),
/// 2. seeds the engine with `item_count` entries parked at the origin,
/// 3. subscribes to `observer`, re-planning synchronously on every size
///    change (one width snapshot per trigger, read at the top),
/// 4. fires the first pass - mounting counts as a size change.
///
/// # Errors
///
/// [`OptionsError`] when a dimension is negative or non-finite.
pub fn mount<E, O>(
    options: GridOptions,
    tuning: E::Tuning,
    engine: E,
    item_count: usize,
    observer: O,
) -> Result<GridHandle<E, O>, OptionsError>
where
    E: AnimationEngine + 'static,
    O: SizeObserver + Clone + 'static,
{
    // Seed the static-launch predicate with the pre-subscription reading.
    let last_width = observer.measure();
    let controller = Rc::new(RefCell::new(GridController::new(
        options, tuning, engine, item_count, last_width,
    )?));

    let handler_controller = Rc::clone(&controller);
    let handler_observer = observer.clone();
    let unsubscribe = observer.subscribe(Box::new(move || {
        // One snapshot per trigger, taken before any computation.
        let width = handler_observer.measure();
        handler_controller.borrow_mut().relayout(width);
    }));

    // First trigger.
    controller.borrow_mut().relayout(observer.measure());

    Ok(GridHandle {
        controller,
        observer,
        unsubscribe: Some(unsubscribe),
    })
}

/// Unmount and clean up.
pub fn unmount<E: AnimationEngine, O: SizeObserver>(handle: GridHandle<E, O>) {
    handle.unmount();
}

// =============================================================================
// TESTS
// =============================================================================
