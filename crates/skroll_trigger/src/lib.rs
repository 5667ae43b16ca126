//! skroll trigger engine
//!
//! Couples scroll position to animation playback:
//!
//! - **Observers**: viewport-relative trigger windows resolved to document
//!   anchors, with phase hysteresis and transition events
//! - **Bindings**: scrubbed timelines, toggled timelines, and active-index
//!   switchers, evaluated in registration order
//! - **Pinning**: viewport-fixed elements with flow spacers so document
//!   length never changes
//! - **Responsive variants**: width-ranged parameter sets; crossing a
//!   breakpoint reverts and rebuilds every mounted scene
//! - **Lifecycle scopes**: one revert destroys everything a scene created,
//!   idempotently
//!
//! The host drives everything through three [`ScrollEngine`] entry points:
//! `on_scroll`, `on_resize`, and `on_frame`.

pub mod binding;
pub mod engine;
pub mod observer;
pub mod pin;
pub mod responsive;
pub mod scope;
pub mod switcher;

pub use binding::{Scrub, ToggleAction, ToggleActions, TriggerConfig};
pub use engine::{SceneBuilder, ScrollEngine};
pub use observer::{
    ElementEdge, EndSpec, ScrollObserver, ThresholdSpec, ToggleEvent, TogglePhase, TriggerWindow,
};
pub use pin::PinManager;
pub use responsive::{ResponsiveContext, Variant, VariantParams};
pub use scope::{BindingId, ScopeId, SwitcherId};
pub use switcher::{ActiveIndexSwitcher, SwitcherConfig};
