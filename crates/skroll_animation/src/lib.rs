//! skroll animation primitives
//!
//! Timelines, tweens, easing curves, and the frame ticker that advances
//! wall-clock playback:
//!
//! - **Easing**: pure curves mapping progress ratios through acceleration
//!   profiles (with deliberate overshoot for `BackOut`)
//! - **Tweens**: one property of one element between two endpoints, with
//!   "current value" endpoints latched on first application
//! - **Timelines**: ordered tween sequences with relative positioning,
//!   nesting, and a clamped playhead driven either by a scroll observer
//!   (scrubbing) or by the ticker (play/reverse)
//! - **Ticker**: the per-engine registry that advances playing timelines on
//!   host frame ticks; weak handles no-op after teardown

pub mod easing;
pub mod ticker;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use ticker::{Ticker, TickerHandle, TimelineId};
pub use timeline::{PlayDirection, Position, Timeline};
pub use tween::{Tween, TweenValue};
