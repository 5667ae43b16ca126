//! Scroll-progress observers
//!
//! An observer maps the viewport's scroll offset into a progress ratio for
//! one element's trigger window. The window is declared with viewport-relative
//! thresholds ("the element's top reaches 80% down the viewport"), resolved
//! against document coordinates on every evaluation so that layout changes
//! are picked up without re-registration.
//!
//! Observers also track which side of the window the scroll position is on
//! and emit transition events with hysteresis: an event fires only when the
//! phase actually changes, never again while the position stays inside the
//! same phase.

use smallvec::SmallVec;

use skroll_core::{Rect, Viewport};

/// Which edge of the element a threshold refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEdge {
    Top,
    Bottom,
}

/// A scroll threshold: an element edge meeting a viewport fraction
///
/// `viewport_fraction` is measured from the top of the viewport: 0.0 is the
/// viewport top, 1.0 the bottom, 0.5 the center. The threshold is met when
/// the element edge scrolls up to that line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdSpec {
    pub edge: ElementEdge,
    pub viewport_fraction: f32,
}

impl ThresholdSpec {
    pub const fn new(edge: ElementEdge, viewport_fraction: f32) -> Self {
        Self {
            edge,
            viewport_fraction,
        }
    }

    /// Element top at the viewport top ("top top")
    pub const fn top_top() -> Self {
        Self::new(ElementEdge::Top, 0.0)
    }

    /// Element top at the viewport center ("top center")
    pub const fn top_center() -> Self {
        Self::new(ElementEdge::Top, 0.5)
    }

    /// Element top at the viewport bottom ("top bottom")
    pub const fn top_bottom() -> Self {
        Self::new(ElementEdge::Top, 1.0)
    }

    /// Element bottom at the viewport top ("bottom top")
    pub const fn bottom_top() -> Self {
        Self::new(ElementEdge::Bottom, 0.0)
    }

    /// Element bottom at the viewport center ("bottom center")
    pub const fn bottom_center() -> Self {
        Self::new(ElementEdge::Bottom, 0.5)
    }

    /// Element bottom at the viewport bottom ("bottom bottom")
    pub const fn bottom_bottom() -> Self {
        Self::new(ElementEdge::Bottom, 1.0)
    }

    /// Element top at an arbitrary viewport fraction ("top 80%")
    pub const fn top_at(viewport_fraction: f32) -> Self {
        Self::new(ElementEdge::Top, viewport_fraction)
    }

    /// Element bottom at an arbitrary viewport fraction
    pub const fn bottom_at(viewport_fraction: f32) -> Self {
        Self::new(ElementEdge::Bottom, viewport_fraction)
    }

    /// Scroll offset at which this threshold is met, given the element's
    /// document-flow bounds
    pub fn anchor(&self, bounds: Rect, viewport: &Viewport) -> f32 {
        let edge_y = match self.edge {
            ElementEdge::Top => bounds.top(),
            ElementEdge::Bottom => bounds.bottom(),
        };
        edge_y - viewport.height * self.viewport_fraction
    }
}

/// How the end of a trigger window is declared
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndSpec {
    /// Another element-edge threshold
    Threshold(ThresholdSpec),
    /// A fixed scroll distance past the start anchor ("+=N")
    Distance(f32),
}

/// The scroll interval a trigger is active over
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerWindow {
    pub start: ThresholdSpec,
    pub end: EndSpec,
}

impl TriggerWindow {
    pub const fn new(start: ThresholdSpec, end: ThresholdSpec) -> Self {
        Self {
            start,
            end: EndSpec::Threshold(end),
        }
    }

    /// Window ending a fixed scroll distance past the start anchor
    pub const fn with_distance(start: ThresholdSpec, distance: f32) -> Self {
        Self {
            start,
            end: EndSpec::Distance(distance),
        }
    }

    /// Unclamped progress ratio; < 0 before the window, >= 1 past it
    ///
    /// A degenerate window (end anchor at or before the start anchor) reports
    /// 1.0, so a misdeclared trigger is always-complete rather than silently
    /// dead.
    fn ratio(&self, bounds: Rect, viewport: &Viewport) -> f32 {
        let start = self.start.anchor(bounds, viewport);
        let end = match self.end {
            EndSpec::Threshold(threshold) => threshold.anchor(bounds, viewport),
            EndSpec::Distance(distance) => start + distance,
        };
        let span = end - start;
        if span <= 0.0 {
            return 1.0;
        }
        (viewport.scroll_y - start) / span
    }

    /// Progress through the window, clamped to [0, 1]
    pub fn progress(&self, bounds: Rect, viewport: &Viewport) -> f32 {
        self.ratio(bounds, viewport).clamp(0.0, 1.0)
    }
}

/// Which side of the trigger window the scroll position is on
///
/// `Active` covers [start, end): landing exactly on the start anchor counts
/// as entered, landing exactly on the end anchor counts as left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePhase {
    Before,
    Active,
    After,
}

impl TogglePhase {
    fn from_ratio(ratio: f32) -> Self {
        if ratio < 0.0 {
            TogglePhase::Before
        } else if ratio < 1.0 {
            TogglePhase::Active
        } else {
            TogglePhase::After
        }
    }
}

/// Phase transition emitted by an observer update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Before -> Active
    Enter,
    /// Active -> After
    Leave,
    /// After -> Active
    EnterBack,
    /// Active -> Before
    LeaveBack,
}

/// Stateful per-binding observer: progress plus phase hysteresis
#[derive(Clone, Debug)]
pub struct ScrollObserver {
    window: TriggerWindow,
    phase: TogglePhase,
    progress: f32,
}

impl ScrollObserver {
    pub fn new(window: TriggerWindow) -> Self {
        Self {
            window,
            phase: TogglePhase::Before,
            progress: 0.0,
        }
    }

    pub fn window(&self) -> TriggerWindow {
        self.window
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    /// Progress from the most recent update, in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Re-evaluate against the current scroll position
    ///
    /// Pushes the phase transitions this move caused into `events`. A jump
    /// across the whole window emits both boundary events, in traversal
    /// order, so toggled bindings never miss a crossing.
    pub fn update(
        &mut self,
        bounds: Rect,
        viewport: &Viewport,
        events: &mut SmallVec<[ToggleEvent; 2]>,
    ) -> f32 {
        let ratio = self.window.ratio(bounds, viewport);
        let next = TogglePhase::from_ratio(ratio);
        match (self.phase, next) {
            (TogglePhase::Before, TogglePhase::Active) => events.push(ToggleEvent::Enter),
            (TogglePhase::Active, TogglePhase::After) => events.push(ToggleEvent::Leave),
            (TogglePhase::After, TogglePhase::Active) => events.push(ToggleEvent::EnterBack),
            (TogglePhase::Active, TogglePhase::Before) => events.push(ToggleEvent::LeaveBack),
            (TogglePhase::Before, TogglePhase::After) => {
                events.push(ToggleEvent::Enter);
                events.push(ToggleEvent::Leave);
            }
            (TogglePhase::After, TogglePhase::Before) => {
                events.push(ToggleEvent::EnterBack);
                events.push(ToggleEvent::LeaveBack);
            }
            _ => {}
        }
        self.phase = next;
        self.progress = ratio.clamp(0.0, 1.0);
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f32) -> Viewport {
        Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y,
        }
    }

    // Element spanning document y in [1600, 2400)
    fn bounds() -> Rect {
        Rect::new(0.0, 1600.0, 1280.0, 800.0)
    }

    #[test]
    fn test_anchor_math() {
        let vp = viewport(0.0);
        // "top bottom": element top at viewport bottom => scroll 1600 - 800
        assert_eq!(ThresholdSpec::top_bottom().anchor(bounds(), &vp), 800.0);
        // "top top": element top at viewport top => scroll 1600
        assert_eq!(ThresholdSpec::top_top().anchor(bounds(), &vp), 1600.0);
        // "bottom center": element bottom at viewport center
        assert_eq!(ThresholdSpec::bottom_center().anchor(bounds(), &vp), 2000.0);
    }

    #[test]
    fn test_progress_clamps_and_interpolates() {
        let window = TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::top_top());
        assert_eq!(window.progress(bounds(), &viewport(0.0)), 0.0);
        assert_eq!(window.progress(bounds(), &viewport(1200.0)), 0.5);
        assert_eq!(window.progress(bounds(), &viewport(1600.0)), 1.0);
        assert_eq!(window.progress(bounds(), &viewport(9999.0)), 1.0);
    }

    #[test]
    fn test_distance_end() {
        let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
        assert_eq!(window.progress(bounds(), &viewport(1600.0)), 0.0);
        assert_eq!(window.progress(bounds(), &viewport(2100.0)), 0.5);
        assert_eq!(window.progress(bounds(), &viewport(2600.0)), 1.0);
    }

    #[test]
    fn test_degenerate_window_is_always_complete() {
        // End threshold resolves above the start anchor
        let window = TriggerWindow::new(ThresholdSpec::top_top(), ThresholdSpec::top_bottom());
        assert_eq!(window.progress(bounds(), &viewport(0.0)), 1.0);
    }

    #[test]
    fn test_phase_events_with_hysteresis() {
        let window = TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::bottom_top());
        let mut observer = ScrollObserver::new(window);
        let mut events = SmallVec::new();

        observer.update(bounds(), &viewport(0.0), &mut events);
        assert!(events.is_empty());

        observer.update(bounds(), &viewport(1000.0), &mut events);
        assert_eq!(events.as_slice(), &[ToggleEvent::Enter]);

        // Still inside: no repeat event
        events.clear();
        observer.update(bounds(), &viewport(1200.0), &mut events);
        assert!(events.is_empty());

        events.clear();
        observer.update(bounds(), &viewport(500.0), &mut events);
        assert_eq!(events.as_slice(), &[ToggleEvent::LeaveBack]);
    }

    #[test]
    fn test_fast_jump_emits_both_crossings() {
        let window = TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::bottom_top());
        let mut observer = ScrollObserver::new(window);
        let mut events = SmallVec::new();

        observer.update(bounds(), &viewport(9000.0), &mut events);
        assert_eq!(events.as_slice(), &[ToggleEvent::Enter, ToggleEvent::Leave]);

        events.clear();
        observer.update(bounds(), &viewport(0.0), &mut events);
        assert_eq!(
            events.as_slice(),
            &[ToggleEvent::EnterBack, ToggleEvent::LeaveBack]
        );
    }

    #[test]
    fn test_boundary_equality_counts_as_entered() {
        let window = TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::bottom_top());
        let mut observer = ScrollObserver::new(window);
        let mut events = SmallVec::new();

        // Exactly on the start anchor
        observer.update(bounds(), &viewport(800.0), &mut events);
        assert_eq!(observer.phase(), TogglePhase::Active);

        // Exactly on the end anchor: already past
        events.clear();
        observer.update(bounds(), &viewport(2400.0), &mut events);
        assert_eq!(observer.phase(), TogglePhase::After);
    }
}
