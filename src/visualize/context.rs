//! The active-visualizer context cell.
//!
//! One `ActiveVisualizer` belongs to one render pass and is threaded through
//! the traversal explicitly; there is no process-wide cell. Scoped
//! installation follows a strict push/pop discipline: `set_scoped` pushes a
//! visualizer and hands back a guard whose drop pops it, so the previous
//! visualizer is restored on every exit path, unwinding included.

use crate::visualize::types::{no_op_visualizer, VisualizerFn};
use std::cell::RefCell;
use std::rc::Rc;

/// Dynamically scoped holder of the currently installed visualizer.
pub struct ActiveVisualizer {
    stack: RefCell<Vec<Rc<VisualizerFn>>>,
}

impl ActiveVisualizer {
    /// Starts with the default no-op visualizer installed.
    pub fn new() -> Self {
        Self {
            stack: RefCell::new(vec![no_op_visualizer()]),
        }
    }

    /// Creates a context with `visualizer` installed above the default.
    pub fn with_visualizer(visualizer: Rc<VisualizerFn>) -> Self {
        let active = Self::new();
        active.stack.borrow_mut().push(visualizer);
        active
    }

    /// The innermost installed visualizer.
    pub fn get(&self) -> Rc<VisualizerFn> {
        let stack = self.stack.borrow();
        // The bottom no-op entry is never popped.
        Rc::clone(stack.last().expect("context always holds the default visualizer"))
    }

    /// Installs `visualizer` until the returned guard is dropped. Guards
    /// nest; restoration unwinds innermost-first.
    #[must_use = "dropping the guard immediately uninstalls the visualizer"]
    pub fn set_scoped(&self, visualizer: Rc<VisualizerFn>) -> ScopedVisualizer<'_> {
        self.stack.borrow_mut().push(visualizer);
        ScopedVisualizer { active: self }
    }

    /// Current nesting depth, counting the default visualizer.
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

impl Default for ActiveVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a scoped visualizer installation; dropping it restores the
/// previously installed visualizer.
pub struct ScopedVisualizer<'a> {
    active: &'a ActiveVisualizer,
}

impl Drop for ScopedVisualizer<'_> {
    fn drop(&mut self) {
        self.active.stack.borrow_mut().pop();
    }
}
