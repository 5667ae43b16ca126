//! Lifecycle scopes
//!
//! Every binding, timeline, switcher, and pin created while mounting a scene
//! is recorded against a [`LifecycleScope`]. Reverting the scope destroys
//! everything it recorded, in one shot, exactly once: a second revert finds
//! the record already drained and does nothing. The scope also keeps the
//! scene's build function so a responsive variant change can rebuild it
//! under new parameters.

use std::sync::Arc;

use slotmap::new_key_type;

use skroll_animation::TimelineId;

new_key_type! {
    /// Handle to a mounted scope
    pub struct ScopeId;
    /// Handle to a live binding within the engine
    pub struct BindingId;
    /// Handle to an active-index switcher within the engine
    pub struct SwitcherId;
}

/// Build function invoked at mount and on every variant rebuild
pub(crate) type BuildFn = Arc<dyn Fn(&mut crate::engine::SceneBuilder<'_, '_>)>;

/// Record of everything one mounted scene owns
pub(crate) struct LifecycleScope {
    pub build: BuildFn,
    pub bindings: Vec<BindingId>,
    pub timelines: Vec<TimelineId>,
    pub switchers: Vec<SwitcherId>,
}

impl LifecycleScope {
    pub fn new(build: BuildFn) -> Self {
        Self {
            build,
            bindings: Vec::new(),
            timelines: Vec::new(),
            switchers: Vec::new(),
        }
    }

    /// Drain the resource record for teardown
    ///
    /// Returns everything recorded so far and leaves the scope empty, which
    /// is what makes a second revert a no-op.
    pub fn drain(&mut self) -> (Vec<BindingId>, Vec<TimelineId>, Vec<SwitcherId>) {
        (
            std::mem::take(&mut self.bindings),
            std::mem::take(&mut self.timelines),
            std::mem::take(&mut self.switchers),
        )
    }
}
