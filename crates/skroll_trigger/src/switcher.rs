//! Active-index switching
//!
//! Cross-fades a set of stacked layers so exactly one is visible at a time.
//! Each activation starts short opacity/scale transitions toward the new
//! state; any transition still in flight from the previous activation is
//! cancelled first, so rapid index changes can never leave two layers
//! settled visible.

use smallvec::SmallVec;

use skroll_animation::{Easing, Position, TickerHandle, Timeline, TimelineId, Tween};
use skroll_core::{ElementId, Property, Stage};

/// Layer set and transition styling for an [`ActiveIndexSwitcher`]
#[derive(Clone, Debug)]
pub struct SwitcherConfig {
    pub layers: Vec<ElementId>,
    /// Cross-fade duration in seconds
    pub duration: f32,
    pub easing: Easing,
    /// Scale inactive layers settle at (slight zoom keeps the fade lively)
    pub inactive_scale: f32,
}

impl SwitcherConfig {
    pub fn new(layers: Vec<ElementId>) -> Self {
        Self {
            layers,
            duration: 0.8,
            easing: Easing::PowerOut(2),
            inactive_scale: 1.1,
        }
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn inactive_scale(mut self, scale: f32) -> Self {
        self.inactive_scale = scale;
        self
    }
}

/// Keeps exactly one of a set of layers visible
pub struct ActiveIndexSwitcher {
    config: SwitcherConfig,
    active: usize,
    /// Cross-fade timelines from the most recent activation
    transitions: SmallVec<[TimelineId; 8]>,
}

impl ActiveIndexSwitcher {
    pub fn new(config: SwitcherConfig) -> Self {
        Self {
            config,
            active: 0,
            transitions: SmallVec::new(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn layer_count(&self) -> usize {
        self.config.layers.len()
    }

    /// Write the steady state for index 0 instantly (mount time)
    pub fn initialize(&mut self, stage: &mut dyn Stage) {
        for (i, &layer) in self.config.layers.iter().enumerate() {
            let (opacity, scale) = self.steady_state(i == 0);
            stage.write(layer, Property::Opacity, opacity);
            stage.write(layer, Property::Scale, scale);
        }
        self.active = 0;
    }

    fn steady_state(&self, active: bool) -> (f32, f32) {
        if active {
            (1.0, 1.0)
        } else {
            (0.0, self.config.inactive_scale)
        }
    }

    /// Cross-fade to a new active index
    ///
    /// Out-of-range indices and re-activations of the current index are
    /// no-ops. In-flight transitions are removed before the new ones start;
    /// their layers pick up the fade from their current values.
    pub fn activate(&mut self, index: usize, ticker: &TickerHandle) {
        if index >= self.config.layers.len() || index == self.active {
            return;
        }
        tracing::debug!(from = self.active, to = index, "switcher activation");
        self.active = index;

        for id in self.transitions.drain(..) {
            ticker.remove(id);
        }
        for (i, &layer) in self.config.layers.iter().enumerate() {
            let (opacity, scale) = self.steady_state(i == index);
            let timeline = Timeline::new()
                .add(
                    Tween::to(layer, Property::Opacity, opacity, self.config.duration, self.config.easing),
                    Position::Start,
                )
                .add(
                    Tween::to(layer, Property::Scale, scale, self.config.duration, self.config.easing),
                    Position::At(0.0),
                );
            if let Some(id) = ticker.register(timeline) {
                ticker.play(id);
                self.transitions.push(id);
            }
        }
    }

    /// Remove any in-flight transitions (scope revert)
    pub fn teardown(&mut self, ticker: &TickerHandle) {
        for id in self.transitions.drain(..) {
            ticker.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skroll_animation::Ticker;
    use skroll_core::{HeadlessStage, Rect};

    fn layers(stage: &mut HeadlessStage, count: usize) -> Vec<ElementId> {
        (0..count)
            .map(|i| {
                stage.add_element(
                    format!("layer-{}", i),
                    Rect::new(0.0, 0.0, 400.0, 300.0),
                )
            })
            .collect()
    }

    fn settle(ticker: &Ticker, stage: &mut HeadlessStage) {
        while ticker.tick(0.1, stage) {}
    }

    #[test]
    fn test_initialize_shows_only_first_layer() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 3);
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids.clone()));
        switcher.initialize(&mut stage);

        assert_eq!(stage.read(ids[0], Property::Opacity), Some(1.0));
        assert_eq!(stage.read(ids[1], Property::Opacity), Some(0.0));
        assert_eq!(stage.read(ids[1], Property::Scale), Some(1.1));
    }

    #[test]
    fn test_activation_settles_exactly_one_visible() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 3);
        let ticker = Ticker::new();
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids.clone()));
        switcher.initialize(&mut stage);

        switcher.activate(2, &ticker.handle());
        settle(&ticker, &mut stage);

        assert_eq!(stage.read(ids[0], Property::Opacity), Some(0.0));
        assert_eq!(stage.read(ids[1], Property::Opacity), Some(0.0));
        assert_eq!(stage.read(ids[2], Property::Opacity), Some(1.0));
        assert_eq!(stage.read(ids[2], Property::Scale), Some(1.0));
    }

    #[test]
    fn test_rapid_switches_cancel_in_flight_transitions() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 3);
        let ticker = Ticker::new();
        let handle = ticker.handle();
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids.clone()));
        switcher.initialize(&mut stage);

        switcher.activate(1, &handle);
        ticker.tick(0.1, &mut stage); // partway through the first fade
        switcher.activate(2, &handle);
        settle(&ticker, &mut stage);

        assert_eq!(stage.read(ids[1], Property::Opacity), Some(0.0));
        assert_eq!(stage.read(ids[2], Property::Opacity), Some(1.0));
        assert_eq!(ticker.timeline_count(), 3);
    }

    #[test]
    fn test_five_layers_settle_around_active_index() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 5);
        let ticker = Ticker::new();
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids.clone()));
        switcher.initialize(&mut stage);

        switcher.activate(3, &ticker.handle());
        settle(&ticker, &mut stage);

        for (i, &layer) in ids.iter().enumerate() {
            if i == 3 {
                assert_eq!(stage.read(layer, Property::Opacity), Some(1.0));
                assert_eq!(stage.read(layer, Property::Scale), Some(1.0));
            } else {
                assert_eq!(stage.read(layer, Property::Opacity), Some(0.0));
                assert_eq!(stage.read(layer, Property::Scale), Some(1.1));
            }
        }
    }

    #[test]
    fn test_reactivating_current_index_is_noop() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 2);
        let ticker = Ticker::new();
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids));
        switcher.initialize(&mut stage);

        switcher.activate(0, &ticker.handle());
        assert_eq!(ticker.timeline_count(), 0);
    }

    #[test]
    fn test_teardown_removes_transitions() {
        let mut stage = HeadlessStage::new();
        let ids = layers(&mut stage, 2);
        let ticker = Ticker::new();
        let handle = ticker.handle();
        let mut switcher = ActiveIndexSwitcher::new(SwitcherConfig::new(ids));
        switcher.initialize(&mut stage);

        switcher.activate(1, &handle);
        switcher.teardown(&handle);
        assert_eq!(ticker.timeline_count(), 0);
        assert!(!ticker.tick(0.1, &mut stage));
    }
}
