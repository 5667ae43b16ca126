//! Viewport pinning
//!
//! While a pinned trigger's window is active, the element is fixed to the
//! viewport and a spacer of its natural height takes its place in flow, so
//! the total scrollable length of the document does not change. Pin and
//! release are driven from observer phase changes; the manager keeps the
//! spacer bookkeeping so that release (and re-pin after a rebuild) never
//! leaks a stale spacer.

use rustc_hash::FxHashMap;

use skroll_core::{ElementId, SpacerId, Stage};

struct ActivePin {
    spacer: SpacerId,
}

/// Tracks which elements are currently pinned and their spacers
#[derive(Default)]
pub struct PinManager {
    active: FxHashMap<ElementId, ActivePin>,
}

impl PinManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinned(&self, element: ElementId) -> bool {
        self.active.contains_key(&element)
    }

    pub fn pinned_count(&self) -> usize {
        self.active.len()
    }

    /// Pin an element, inserting a spacer of its natural height
    ///
    /// Re-pinning an already-pinned element removes the stale spacer first.
    /// Unknown elements are ignored.
    pub fn pin(&mut self, stage: &mut dyn Stage, element: ElementId) {
        if let Some(old) = self.active.remove(&element) {
            stage.remove_spacer(old.spacer);
        }
        let size = match stage.natural_size(element) {
            Some(size) => size,
            None => {
                tracing::debug!("pin skipped: element missing from stage");
                return;
            }
        };
        stage.set_pinned(element, true);
        if let Some(spacer) = stage.insert_spacer(element, size.height) {
            self.active.insert(element, ActivePin { spacer });
        }
    }

    /// Return a pinned element to flow and remove its spacer
    pub fn release(&mut self, stage: &mut dyn Stage, element: ElementId) {
        if let Some(pin) = self.active.remove(&element) {
            stage.remove_spacer(pin.spacer);
            stage.set_pinned(element, false);
        }
    }

    /// Release every active pin (engine teardown)
    pub fn release_all(&mut self, stage: &mut dyn Stage) {
        for (element, pin) in self.active.drain() {
            stage.remove_spacer(pin.spacer);
            stage.set_pinned(element, false);
        }
    }
}
