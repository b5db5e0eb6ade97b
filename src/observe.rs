//! Container size observation.
//!
//! The pipeline recomputes whenever the container's measured width changes.
//! [`SizeObserver`] is the contract for whatever reports those changes;
//! [`ContainerSize`] is the built-in implementation for hosts that push
//! measurements in by hand.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

// =============================================================================
// OBSERVER CONTRACT
// =============================================================================

/// Reports container size changes to subscribed handlers.
///
/// Handlers are invoked synchronously, receive no payload, and re-read the
/// size themselves via [`measure`](SizeObserver::measure) - one snapshot per
/// trigger, taken at the top of the handler.
pub trait SizeObserver {
    /// Current measured outer width, or `None` while unmeasured.
    fn measure(&self) -> Option<f64>;

    /// Register a change handler.
    ///
    /// Returns the cleanup function that releases the subscription; the
    /// session must call it on teardown. Handlers must not subscribe or
    /// unsubscribe from inside a notification.
    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Box<dyn FnOnce()>;
}

// =============================================================================
// CONTAINER SIZE
// =============================================================================

struct HandlerRegistry {
    next_id: usize,
    entries: Vec<(usize, Box<dyn FnMut()>)>,
}

/// Hand-driven size source backed by a width signal.
///
/// Hosts that already know when their container resizes (a windowing layer, a
/// DOM bridge, a test) call [`set_width`](ContainerSize::set_width);
/// subscribers run synchronously before it returns. Clones share the same
/// underlying state.
#[derive(Clone)]
pub struct ContainerSize {
    width: Signal<Option<f64>>,
    handlers: Rc<RefCell<HandlerRegistry>>,
}

impl ContainerSize {
    /// Create an unmeasured container.
    pub fn new() -> Self {
        Self {
            width: signal(None),
            handlers: Rc::new(RefCell::new(HandlerRegistry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Create a container with a known initial width (no notification).
    pub fn with_width(width: f64) -> Self {
        let container = Self::new();
        container.width.set(Some(width));
        container
    }

    /// Reactive view of the current width, for rendering layers that want to
    /// track it.
    pub fn width_signal(&self) -> Signal<Option<f64>> {
        self.width.clone()
    }

    /// Record a new measurement and notify subscribers synchronously.
    pub fn set_width(&self, width: f64) {
        self.width.set(Some(width));

        let mut handlers = self.handlers.borrow_mut();
        for (_, handler) in handlers.entries.iter_mut() {
            handler();
        }
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().entries.len()
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeObserver for ContainerSize {
    fn measure(&self) -> Option<f64> {
        self.width.get()
    }

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Box<dyn FnOnce()> {
        let id = {
            let mut handlers = self.handlers.borrow_mut();
            let id = handlers.next_id;
            handlers.next_id += 1;
            handlers.entries.push((id, handler));
            id
        };

        let handlers = Rc::clone(&self.handlers);
        Box::new(move || {
            handlers
                .borrow_mut()
                .entries
                .retain(|(handler_id, _)| *handler_id != id);
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_starts_unmeasured() {
        let container = ContainerSize::new();
        assert_eq!(container.measure(), None);
    }

    #[test]
    fn test_with_width_is_measured_without_notifying() {
        let container = ContainerSize::with_width(800.0);
        assert_eq!(container.measure(), Some(800.0));
    }

    #[test]
    fn test_set_width_notifies_synchronously() {
        let container = ContainerSize::new();
        let fired = Rc::new(Cell::new(0));

        let fired_in_handler = Rc::clone(&fired);
        let _cleanup = container.subscribe(Box::new(move || {
            fired_in_handler.set(fired_in_handler.get() + 1);
        }));

        container.set_width(640.0);
        assert_eq!(fired.get(), 1);
        assert_eq!(container.measure(), Some(640.0));

        container.set_width(480.0);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_handler_can_reread_the_new_width() {
        let container = ContainerSize::new();
        let seen = Rc::new(Cell::new(None));

        let observer = container.clone();
        let seen_in_handler = Rc::clone(&seen);
        let _cleanup = container.subscribe(Box::new(move || {
            seen_in_handler.set(observer.measure());
        }));

        container.set_width(1000.0);
        assert_eq!(seen.get(), Some(1000.0));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let container = ContainerSize::new();
        let fired = Rc::new(Cell::new(0));

        let fired_in_handler = Rc::clone(&fired);
        let cleanup = container.subscribe(Box::new(move || {
            fired_in_handler.set(fired_in_handler.get() + 1);
        }));

        container.set_width(640.0);
        assert_eq!(container.subscriber_count(), 1);

        cleanup();
        assert_eq!(container.subscriber_count(), 0);

        container.set_width(480.0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let container = ContainerSize::new();
        let clone = container.clone();

        container.set_width(320.0);
        assert_eq!(clone.measure(), Some(320.0));
        assert_eq!(clone.width_signal().get(), Some(320.0));
    }
}
