//! Test doubles shared by the pipeline tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animate::{AnimationEngine, HeightTarget, ItemTarget};

/// One recorded engine call, flattened for easy assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    SetItemCount(usize),
    Item {
        index: usize,
        x: f64,
        y: f64,
        delay: f64,
        immediate: bool,
        tuning: &'static str,
    },
    Height {
        height: f64,
        immediate: bool,
    },
}

/// Records every request in call order.
///
/// The height settles instantly (the recorded target becomes the current
/// value), so the next height decision sees a non-zero reading - the same
/// thing a real engine converges to between triggers.
///
/// Clones share the same call log, so tests can keep a handle after moving
/// the engine into the pipeline.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    calls: Rc<RefCell<Vec<EngineCall>>>,
    height: Rc<Cell<f64>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    /// Only the per-item requests, in call order.
    pub fn item_calls(&self) -> Vec<EngineCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, EngineCall::Item { .. }))
            .cloned()
            .collect()
    }

    /// Stagger delays of the per-item requests, in call order.
    pub fn delays(&self) -> Vec<f64> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                EngineCall::Item { delay, .. } => Some(*delay),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far (the height value stays).
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl AnimationEngine for RecordingEngine {
    type Tuning = &'static str;

    fn set_item_count(&mut self, count: usize) {
        self.calls.borrow_mut().push(EngineCall::SetItemCount(count));
    }

    fn animate_item(&mut self, index: usize, target: ItemTarget<&'static str>) {
        self.calls.borrow_mut().push(EngineCall::Item {
            index,
            x: target.position.x,
            y: target.position.y,
            delay: target.delay,
            immediate: target.immediate,
            tuning: target.tuning,
        });
    }

    fn animate_height(&mut self, target: HeightTarget) {
        self.calls.borrow_mut().push(EngineCall::Height {
            height: target.height,
            immediate: target.immediate,
        });
        self.height.set(target.height);
    }

    fn height(&self) -> f64 {
        self.height.get()
    }
}
