//! Frame ticker
//!
//! Owns every timeline that can play over wall-clock time and advances the
//! playing ones on each host frame tick. The engine holds the [`Ticker`];
//! components that need to start/stop playback hold a [`TickerHandle`], a
//! weak reference whose operations become no-ops once the ticker is gone —
//! a dropped scope can never resurrect playback.
//!
//! There is deliberately no background thread and no global instance: the
//! host event loop is the only clock, and each engine owns its own ticker.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use skroll_core::Stage;

use crate::timeline::Timeline;

new_key_type! {
    /// Handle to a timeline registered with the ticker
    pub struct TimelineId;
}

struct TickerInner {
    timelines: SlotMap<TimelineId, Timeline>,
}

/// Registry of tickable timelines
pub struct Ticker {
    inner: Arc<Mutex<TickerInner>>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TickerInner {
                timelines: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for registering and controlling timelines
    pub fn handle(&self) -> TickerHandle {
        TickerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance every playing timeline by `dt` seconds
    ///
    /// Returns true if any timeline is still playing (another frame is
    /// wanted). Timelines are advanced in registration order, so conflicting
    /// writes resolve to the last-registered timeline within the frame.
    pub fn tick(&self, dt: f32, stage: &mut dyn Stage) -> bool {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut any_playing = false;
        for (_, timeline) in inner.timelines.iter_mut() {
            if timeline.tick(dt, stage) {
                any_playing = true;
            }
        }
        any_playing
    }

    /// Check if any timeline is currently playing
    pub fn has_active(&self) -> bool {
        let inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.timelines.iter().any(|(_, t)| t.is_playing())
    }

    /// Number of registered timelines
    pub fn timeline_count(&self) -> usize {
        let inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.timelines.len()
    }

    /// Jump a timeline to its end state and stop it
    pub fn complete(&self, id: TimelineId, stage: &mut dyn Stage) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(timeline) = inner.timelines.get_mut(id) {
            timeline.complete(stage);
        }
    }

    /// Move a timeline's playhead directly (scrub coupling)
    pub fn advance_to(&self, id: TimelineId, position: f32, stage: &mut dyn Stage) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(timeline) = inner.timelines.get_mut(id) {
            timeline.advance_to(position, stage);
        }
    }
}

/// Weak handle to the ticker
///
/// All operations silently no-op after the ticker is dropped.
#[derive(Clone)]
pub struct TickerHandle {
    inner: Weak<Mutex<TickerInner>>,
}

impl TickerHandle {
    /// Register a timeline, returning its id (None if the ticker is gone)
    pub fn register(&self, timeline: Timeline) -> Option<TimelineId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = match inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let id = guard.timelines.insert(timeline);
            tracing::trace!(?id, "timeline registered");
            id
        })
    }

    /// Remove a timeline; in-flight playback for it stops immediately
    pub fn remove(&self, id: TimelineId) {
        if let Some(inner) = self.inner.upgrade() {
            let mut guard = match inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.timelines.remove(id);
        }
    }

    /// Apply a function to a registered timeline
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.inner.upgrade().and_then(|inner| {
            let mut guard = match inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.timelines.get_mut(id).map(f)
        })
    }

    pub fn play(&self, id: TimelineId) {
        self.with_timeline(id, |t| t.play());
    }

    pub fn reverse(&self, id: TimelineId) {
        self.with_timeline(id, |t| t.reverse());
    }

    pub fn restart(&self, id: TimelineId) {
        self.with_timeline(id, |t| t.restart());
    }

    pub fn is_playing(&self, id: TimelineId) -> bool {
        self.with_timeline(id, |t| t.is_playing()).unwrap_or(false)
    }

    /// Check if the ticker is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
