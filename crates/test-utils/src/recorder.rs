//! Shared invocation log for never-invoked assertions.

use std::sync::{Arc, Mutex};

/// Records which steps were actually invoked during a run.
///
/// Clone one handle into each [`recording_task`](crate::builders::recording_task);
/// after the run, assert on [`invoked`](Self::invoked) or
/// [`was_invoked`](Self::was_invoked) to verify that steps behind a failed
/// task never ran.
#[derive(Debug, Clone, Default)]
pub struct InvocationLog {
    inner: Arc<Mutex<Vec<usize>>>,
}

impl InvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the task at `step` was invoked.
    pub fn record(&self, step: usize) {
        self.inner.lock().unwrap().push(step);
    }

    /// All invoked steps, in invocation order.
    pub fn invoked(&self) -> Vec<usize> {
        self.inner.lock().unwrap().clone()
    }

    /// Returns `true` if the task at `step` was ever invoked.
    pub fn was_invoked(&self, step: usize) -> bool {
        self.inner.lock().unwrap().contains(&step)
    }
}
