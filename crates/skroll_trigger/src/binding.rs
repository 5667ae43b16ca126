//! Trigger bindings
//!
//! A binding couples one observer to the thing it drives: a scrubbed
//! timeline, a toggled timeline, or an active-index switcher. Bindings are
//! declared through [`TriggerConfig`], a builder the scene code hands to the
//! engine together with a timeline.

use skroll_animation::TimelineId;
use skroll_core::ElementId;

use crate::observer::{ScrollObserver, TriggerWindow};
use crate::scope::SwitcherId;

/// How a scrubbed timeline follows scroll progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    /// Playhead snaps to the observed progress on every scroll event
    Immediate,
    /// Playhead eases toward the observed progress with the given
    /// time constant in seconds (larger = laggier)
    Smooth(f32),
}

/// What a toggle transition does to the bound timeline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleAction {
    #[default]
    None,
    Play,
    Reverse,
    Restart,
    Complete,
}

/// One action per phase transition, in GSAP `toggleActions` slot order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// "play none none none": play on first entry, never undo
    pub const fn play_once() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }

    /// "play none none reverse": reveal on entry, undo when scrolled back out
    pub const fn play_reverse() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::Reverse,
        }
    }
}

/// Declaration of a scroll trigger
///
/// With `scrub` set, the bound timeline's playhead follows window progress;
/// without it, phase transitions drive the timeline through `toggle_actions`.
#[derive(Clone, Copy, Debug)]
pub struct TriggerConfig {
    pub element: ElementId,
    pub window: TriggerWindow,
    pub scrub: Option<Scrub>,
    pub pin: bool,
    pub toggle_actions: ToggleActions,
}

impl TriggerConfig {
    pub fn new(element: ElementId, window: TriggerWindow) -> Self {
        Self {
            element,
            window,
            scrub: None,
            pin: false,
            toggle_actions: ToggleActions::play_once(),
        }
    }

    /// Couple the timeline playhead directly to scroll progress
    pub fn scrub(mut self) -> Self {
        self.scrub = Some(Scrub::Immediate);
        self
    }

    /// Couple the playhead to scroll progress with smoothing
    pub fn scrub_smooth(mut self, time_constant: f32) -> Self {
        self.scrub = Some(Scrub::Smooth(time_constant.max(0.0)));
        self
    }

    /// Pin the element to the viewport while the window is active
    pub fn pin(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn toggle_actions(mut self, actions: ToggleActions) -> Self {
        self.toggle_actions = actions;
        self
    }
}

/// What an observer drives
pub(crate) enum BindingKind {
    Scrubbed {
        timeline: TimelineId,
        mode: Scrub,
        /// Playhead target in seconds; smooth scrub chases it on frame ticks
        target: f32,
    },
    Toggled {
        timeline: TimelineId,
        actions: ToggleActions,
    },
    Switch {
        switcher: SwitcherId,
        index: usize,
    },
}

/// A live observer-to-target coupling
pub(crate) struct Binding {
    pub element: ElementId,
    pub observer: ScrollObserver,
    pub pin: bool,
    pub kind: BindingKind,
}
