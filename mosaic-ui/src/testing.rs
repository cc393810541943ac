//! Helpers for exercising components in tests.
//!
//! Enabled by the `testing` feature.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Callback, CallbackWith};

/// Records every value passed to the callbacks it hands out.
///
/// ```
/// use mosaic_ui::testing::CallRecorder;
///
/// let changes = CallRecorder::<f32>::new();
/// let on_change = changes.callback();
/// on_change.call(25.0);
/// on_change.call(50.0);
/// assert_eq!(changes.calls(), vec![25.0, 50.0]);
/// assert_eq!(changes.last(), Some(50.0));
/// ```
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + 'static> CallRecorder<T> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> CallbackWith<T> {
        let calls = Arc::clone(&self.calls);
        CallbackWith::new(move |value: T| calls.lock().push(value))
    }

    /// Every recorded value in call order.
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    /// The most recent value.
    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }

    /// Number of calls.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Forgets recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl CallRecorder<()> {
    /// A unit callback that records each invocation.
    pub fn unit_callback(&self) -> Callback {
        let calls = Arc::clone(&self.calls);
        Callback::new(move || calls.lock().push(()))
    }
}
