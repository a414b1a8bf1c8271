use parking_lot::Mutex;
use std::sync::Arc;

type ChangedCallback = Box<dyn FnMut(f64) + Send>;

/// Shared scroll offset for one axis.
///
/// The controller holds one handle per axis and the layout/render side
/// holds clones of the same cell. `set_value` fires the change callbacks
/// only when the stored value actually changes; callbacks run with the
/// value lock released, so they may read the adjustment freely.
#[derive(Clone)]
pub struct Adjustment {
    value: Arc<Mutex<f64>>,
    changed: Arc<Mutex<Vec<ChangedCallback>>>,
}

impl Adjustment {
    pub fn new(value: f64) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            changed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn value(&self) -> f64 {
        *self.value.lock()
    }

    pub fn set_value(&self, value: f64) {
        {
            let mut current = self.value.lock();
            if *current == value {
                return;
            }
            *current = value;
        }
        for callback in self.changed.lock().iter_mut() {
            callback(value);
        }
    }

    /// Register a callback invoked with the new value on every change.
    pub fn connect_changed(&self, callback: impl FnMut(f64) + Send + 'static) {
        self.changed.lock().push(Box::new(callback));
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl std::fmt::Debug for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adjustment")
            .field("value", &self.value())
            .finish()
    }
}

/// Contract for a child surface that can scroll.
///
/// A kinetic controller is only constructible over something exposing its
/// two adjustments, so a non-scrollable child is rejected at compile time
/// instead of being detected per event.
pub trait Scrollable {
    fn hadjustment(&self) -> Adjustment;
    fn vadjustment(&self) -> Adjustment;
}
