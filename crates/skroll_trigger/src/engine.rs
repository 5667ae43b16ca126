//! Scroll engine
//!
//! [`ScrollEngine`] is the orchestration façade the host talks to. It owns
//! the ticker, every live binding, the pin manager, and the responsive
//! context, and exposes exactly three host entry points: `on_scroll`,
//! `on_resize`, and `on_frame`. Scenes are mounted through build closures
//! that receive a [`SceneBuilder`]; everything a build creates is recorded
//! in a lifecycle scope so unmounting (or a variant rebuild) tears it all
//! down in one shot.
//!
//! Within a single event, bindings are evaluated in registration order, so
//! conflicting writes to the same property settle on the last-registered
//! binding.

use std::sync::Arc;

use slotmap::SlotMap;
use smallvec::SmallVec;

use skroll_animation::{Ticker, TickerHandle, Timeline, TimelineId};
use skroll_core::{ElementId, Stage, Viewport};

use crate::binding::{Binding, BindingKind, Scrub, ToggleAction, TriggerConfig};
use crate::observer::{ScrollObserver, ToggleEvent, TogglePhase, TriggerWindow};
use crate::pin::PinManager;
use crate::responsive::{ResponsiveContext, VariantParams};
use crate::scope::{BindingId, LifecycleScope, ScopeId, SwitcherId};
use crate::switcher::{ActiveIndexSwitcher, SwitcherConfig};

/// Playhead targets closer than this snap to the target outright
const SCRUB_SNAP: f32 = 1e-3;

/// The scroll-linked animation orchestrator
pub struct ScrollEngine {
    viewport: Viewport,
    ticker: Ticker,
    handle: TickerHandle,
    bindings: SlotMap<BindingId, Binding>,
    /// Evaluation order; registration order within and across scopes
    binding_order: Vec<BindingId>,
    switchers: SlotMap<SwitcherId, ActiveIndexSwitcher>,
    scopes: SlotMap<ScopeId, LifecycleScope>,
    pins: PinManager,
    responsive: Option<ResponsiveContext>,
}

impl ScrollEngine {
    pub fn new(viewport: Viewport) -> Self {
        let ticker = Ticker::new();
        let handle = ticker.handle();
        Self {
            viewport,
            ticker,
            handle,
            bindings: SlotMap::with_key(),
            binding_order: Vec::new(),
            switchers: SlotMap::with_key(),
            scopes: SlotMap::with_key(),
            pins: PinManager::new(),
            responsive: None,
        }
    }

    /// Attach responsive variants; the context selects against the current
    /// viewport as it is constructed
    pub fn with_responsive(mut self, responsive: ResponsiveContext) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Parameters of the active variant (defaults when none attached)
    pub fn params(&self) -> VariantParams {
        self.responsive
            .as_ref()
            .map(|r| r.params())
            .unwrap_or_default()
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.responsive.as_ref().map(|r| r.current().name.as_str())
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn pinned_count(&self) -> usize {
        self.pins.pinned_count()
    }

    /// Mount a scene; the build closure runs now and again after every
    /// variant change
    pub fn mount<F>(&mut self, stage: &mut dyn Stage, build: F) -> ScopeId
    where
        F: Fn(&mut SceneBuilder<'_, '_>) + 'static,
    {
        let scope = self.scopes.insert(LifecycleScope::new(Arc::new(build)));
        self.run_build(scope, stage);
        self.evaluate(stage);
        scope
    }

    /// Tear down everything a scope created; a second call is a no-op
    pub fn unmount(&mut self, stage: &mut dyn Stage, scope: ScopeId) {
        if let Some(mut record) = self.scopes.remove(scope) {
            let (bindings, timelines, switchers) = record.drain();
            self.teardown_resources(stage, bindings, timelines, switchers);
        }
    }

    /// Tear down every mounted scope
    pub fn unmount_all(&mut self, stage: &mut dyn Stage) {
        let ids: Vec<ScopeId> = self.scopes.keys().collect();
        for id in ids {
            self.unmount(stage, id);
        }
        self.pins.release_all(stage);
    }

    /// Host scroll event: re-evaluate every binding at the new offset
    pub fn on_scroll(&mut self, stage: &mut dyn Stage, scroll_y: f32) {
        self.viewport.scroll_y = scroll_y.max(0.0);
        self.evaluate(stage);
    }

    /// Host resize event
    ///
    /// A resize that crosses a variant breakpoint reverts every scope and
    /// re-runs its build under the new parameters before re-evaluating.
    pub fn on_resize(&mut self, stage: &mut dyn Stage, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        let changed = match self.responsive.as_mut() {
            Some(responsive) => responsive.update(&self.viewport),
            None => false,
        };
        if changed {
            self.rebuild_all(stage);
        }
        self.evaluate(stage);
    }

    /// Host frame tick: smooth-scrub catch-up plus wall-clock playback
    ///
    /// Returns true while more frames are wanted.
    pub fn on_frame(&mut self, stage: &mut dyn Stage, dt: f32) -> bool {
        let mut chasing = false;
        for i in 0..self.binding_order.len() {
            let bid = self.binding_order[i];
            let binding = match self.bindings.get_mut(bid) {
                Some(binding) => binding,
                None => continue,
            };
            let (timeline, time_constant, target) = match &binding.kind {
                BindingKind::Scrubbed {
                    timeline,
                    mode: Scrub::Smooth(tc),
                    target,
                } => (*timeline, *tc, *target),
                _ => continue,
            };
            let current = match self.handle.with_timeline(timeline, |t| t.position()) {
                Some(position) => position,
                None => continue,
            };
            if (target - current).abs() <= SCRUB_SNAP {
                continue;
            }
            let alpha = if time_constant <= f32::EPSILON {
                1.0
            } else {
                1.0 - (-dt / time_constant).exp()
            };
            let mut next = current + (target - current) * alpha;
            if (target - next).abs() <= SCRUB_SNAP {
                next = target;
            } else {
                chasing = true;
            }
            self.ticker.advance_to(timeline, next, stage);
        }
        self.ticker.tick(dt, stage) || chasing
    }

    /// Check whether another frame tick would do work
    pub fn needs_frame(&self) -> bool {
        if self.ticker.has_active() {
            return true;
        }
        self.bindings.values().any(|binding| match &binding.kind {
            BindingKind::Scrubbed {
                timeline,
                mode: Scrub::Smooth(_),
                target,
            } => self
                .handle
                .with_timeline(*timeline, |t| (t.position() - *target).abs() > SCRUB_SNAP)
                .unwrap_or(false),
            _ => false,
        })
    }

    fn run_build(&mut self, scope: ScopeId, stage: &mut dyn Stage) {
        let build = match self.scopes.get(scope) {
            Some(record) => Arc::clone(&record.build),
            None => return,
        };
        let mut builder = SceneBuilder {
            engine: self,
            stage,
            scope,
        };
        (build)(&mut builder);
    }

    fn rebuild_all(&mut self, stage: &mut dyn Stage) {
        let ids: Vec<ScopeId> = self.scopes.keys().collect();
        tracing::info!(scopes = ids.len(), "variant change: rebuilding scopes");
        for id in ids {
            let drained = self.scopes.get_mut(id).map(|s| s.drain());
            if let Some((bindings, timelines, switchers)) = drained {
                self.teardown_resources(stage, bindings, timelines, switchers);
            }
            self.run_build(id, stage);
        }
    }

    fn teardown_resources(
        &mut self,
        stage: &mut dyn Stage,
        bindings: Vec<BindingId>,
        timelines: Vec<TimelineId>,
        switchers: Vec<SwitcherId>,
    ) {
        for bid in bindings {
            if let Some(binding) = self.bindings.remove(bid) {
                if binding.pin {
                    self.pins.release(stage, binding.element);
                }
            }
            self.binding_order.retain(|&b| b != bid);
        }
        for tid in timelines {
            self.handle.remove(tid);
        }
        for sid in switchers {
            if let Some(mut switcher) = self.switchers.remove(sid) {
                switcher.teardown(&self.handle);
            }
        }
    }

    /// Evaluate every binding against the current viewport, in registration
    /// order
    fn evaluate(&mut self, stage: &mut dyn Stage) {
        let viewport = self.viewport;
        for i in 0..self.binding_order.len() {
            let bid = self.binding_order[i];
            let binding = match self.bindings.get_mut(bid) {
                Some(binding) => binding,
                None => continue,
            };
            let bounds = match stage.bounds(binding.element) {
                Some(bounds) => bounds,
                // Element gone mid-session: binding goes dormant
                None => continue,
            };
            let mut events: SmallVec<[ToggleEvent; 2]> = SmallVec::new();
            let progress = binding.observer.update(bounds, &viewport, &mut events);

            if binding.pin {
                let active = binding.observer.phase() == TogglePhase::Active;
                let element = binding.element;
                if active && !self.pins.is_pinned(element) {
                    self.pins.pin(stage, element);
                } else if !active && self.pins.is_pinned(element) {
                    self.pins.release(stage, element);
                }
            }

            match &mut binding.kind {
                BindingKind::Scrubbed {
                    timeline,
                    mode,
                    target,
                } => {
                    let total = self
                        .handle
                        .with_timeline(*timeline, |t| t.total_duration())
                        .unwrap_or(0.0);
                    let position = progress * total;
                    match mode {
                        Scrub::Immediate => self.ticker.advance_to(*timeline, position, stage),
                        Scrub::Smooth(_) => *target = position,
                    }
                }
                BindingKind::Toggled { timeline, actions } => {
                    for event in events {
                        let action = match event {
                            ToggleEvent::Enter => actions.on_enter,
                            ToggleEvent::Leave => actions.on_leave,
                            ToggleEvent::EnterBack => actions.on_enter_back,
                            ToggleEvent::LeaveBack => actions.on_leave_back,
                        };
                        match action {
                            ToggleAction::None => {}
                            ToggleAction::Play => self.handle.play(*timeline),
                            ToggleAction::Reverse => self.handle.reverse(*timeline),
                            ToggleAction::Restart => self.handle.restart(*timeline),
                            ToggleAction::Complete => self.ticker.complete(*timeline, stage),
                        }
                    }
                }
                BindingKind::Switch { switcher, index } => {
                    let wants_activation = events
                        .iter()
                        .any(|e| matches!(e, ToggleEvent::Enter | ToggleEvent::EnterBack));
                    if wants_activation {
                        if let Some(sw) = self.switchers.get_mut(*switcher) {
                            sw.activate(*index, &self.handle);
                        }
                    }
                }
            }
        }
    }
}

/// Scene construction surface handed to build closures
///
/// Everything registered through the builder is recorded against the scope
/// being built, so the scope's revert covers it.
pub struct SceneBuilder<'a, 'stage> {
    engine: &'a mut ScrollEngine,
    stage: &'a mut (dyn Stage + 'stage),
    scope: ScopeId,
}

impl<'a, 'stage> SceneBuilder<'a, 'stage> {
    /// Active variant parameters, for breakpoint-dependent scenes
    pub fn params(&self) -> VariantParams {
        self.engine.params()
    }

    pub fn viewport(&self) -> Viewport {
        self.engine.viewport
    }

    pub fn stage(&mut self) -> &mut (dyn Stage + 'stage) {
        &mut *self.stage
    }

    /// Bind a timeline to a scroll trigger
    ///
    /// A trigger whose element is missing from the stage is skipped
    /// silently; the rest of the scene mounts normally.
    pub fn trigger(&mut self, config: TriggerConfig, timeline: Timeline) {
        if self.stage.bounds(config.element).is_none() {
            tracing::debug!("trigger skipped: element missing from stage");
            return;
        }
        let timeline_id = match self.engine.handle.register(timeline) {
            Some(id) => id,
            None => return,
        };
        let kind = match config.scrub {
            Some(mode) => BindingKind::Scrubbed {
                timeline: timeline_id,
                mode,
                target: 0.0,
            },
            None => BindingKind::Toggled {
                timeline: timeline_id,
                actions: config.toggle_actions,
            },
        };
        let bid = self.engine.bindings.insert(Binding {
            element: config.element,
            observer: ScrollObserver::new(config.window),
            pin: config.pin,
            kind,
        });
        self.engine.binding_order.push(bid);
        if let Some(scope) = self.engine.scopes.get_mut(self.scope) {
            scope.bindings.push(bid);
            scope.timelines.push(timeline_id);
        }
    }

    /// Register a timeline and start it playing immediately (entrance
    /// animations that run on mount rather than on scroll)
    pub fn play(&mut self, timeline: Timeline) -> Option<TimelineId> {
        let id = self.engine.handle.register(timeline)?;
        self.engine.handle.play(id);
        if let Some(scope) = self.engine.scopes.get_mut(self.scope) {
            scope.timelines.push(id);
        }
        Some(id)
    }

    /// Drive an active-index switcher from per-section trigger windows
    ///
    /// Each section element gets the same window, resolved against its own
    /// bounds; entering section `i` (from either direction) activates layer
    /// `i`. Missing section elements are skipped.
    pub fn active_index(
        &mut self,
        sections: &[ElementId],
        window: TriggerWindow,
        config: SwitcherConfig,
    ) {
        if config.layers.is_empty() {
            tracing::warn!("switcher with no layers skipped");
            return;
        }
        let mut switcher = ActiveIndexSwitcher::new(config);
        switcher.initialize(&mut *self.stage);
        let sid = self.engine.switchers.insert(switcher);
        if let Some(scope) = self.engine.scopes.get_mut(self.scope) {
            scope.switchers.push(sid);
        }
        for (index, &section) in sections.iter().enumerate() {
            if self.stage.bounds(section).is_none() {
                tracing::debug!(index, "switch section missing; binding skipped");
                continue;
            }
            let bid = self.engine.bindings.insert(Binding {
                element: section,
                observer: ScrollObserver::new(window),
                pin: false,
                kind: BindingKind::Switch {
                    switcher: sid,
                    index,
                },
            });
            self.engine.binding_order.push(bid);
            if let Some(scope) = self.engine.scopes.get_mut(self.scope) {
                scope.bindings.push(bid);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ToggleActions;
    use crate::observer::ThresholdSpec;
    use skroll_animation::{Easing, Position, Tween};
    use skroll_core::{HeadlessStage, Property, Rect};

    fn engine() -> ScrollEngine {
        ScrollEngine::new(Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
        })
    }

    fn long_page(stage: &mut HeadlessStage) -> ElementId {
        let section = stage.add_element("section", Rect::new(0.0, 2000.0, 1280.0, 800.0));
        stage.add_element("tail", Rect::new(0.0, 2800.0, 1280.0, 6000.0));
        section
    }

    #[test]
    fn test_scrubbed_binding_follows_scroll() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();

        engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::TranslateY, 0.0, 100.0, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(TriggerConfig::new(section, window).scrub(), timeline);
        });

        engine.on_scroll(&mut stage, 2500.0);
        assert_eq!(stage.read(section, Property::TranslateY), Some(50.0));
        engine.on_scroll(&mut stage, 3000.0);
        assert_eq!(stage.read(section, Property::TranslateY), Some(100.0));
        engine.on_scroll(&mut stage, 2000.0);
        assert_eq!(stage.read(section, Property::TranslateY), Some(0.0));
    }

    #[test]
    fn test_toggled_binding_plays_and_reverses() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();

        engine.mount(&mut stage, move |b| {
            let window =
                TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::bottom_top());
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::Opacity, 0.0, 1.0, 0.5, Easing::Linear),
                Position::Start,
            );
            b.trigger(
                TriggerConfig::new(section, window)
                    .toggle_actions(ToggleActions::play_reverse()),
                timeline,
            );
        });

        engine.on_scroll(&mut stage, 1500.0); // enters the window
        while engine.on_frame(&mut stage, 0.1) {}
        assert_eq!(stage.read(section, Property::Opacity), Some(1.0));

        engine.on_scroll(&mut stage, 0.0); // leaves backwards: reverse
        while engine.on_frame(&mut stage, 0.1) {}
        assert_eq!(stage.read(section, Property::Opacity), Some(0.0));
    }

    #[test]
    fn test_pin_active_only_inside_window() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();
        let height_before = stage.document_height();

        engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::Scale, 1.0, 2.0, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(TriggerConfig::new(section, window).scrub().pin(), timeline);
        });

        engine.on_scroll(&mut stage, 2500.0);
        assert!(stage.is_pinned(section));
        assert_eq!(stage.document_height(), height_before);

        // Progress exactly 1.0: released
        engine.on_scroll(&mut stage, 3000.0);
        assert!(!stage.is_pinned(section));
        assert_eq!(stage.spacer_count(), 0);

        engine.on_scroll(&mut stage, 2500.0);
        assert!(stage.is_pinned(section));
    }

    #[test]
    fn test_unmount_is_idempotent_and_stops_writes() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();

        let scope = engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::Opacity, 0.0, 1.0, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(TriggerConfig::new(section, window).scrub().pin(), timeline);
        });

        engine.on_scroll(&mut stage, 2500.0);
        assert!(stage.is_pinned(section));

        engine.unmount(&mut stage, scope);
        assert!(!stage.is_pinned(section));
        assert_eq!(stage.spacer_count(), 0);

        let writes = stage.write_count();
        engine.on_scroll(&mut stage, 2800.0);
        engine.on_frame(&mut stage, 0.1);
        assert_eq!(stage.write_count(), writes);

        engine.unmount(&mut stage, scope); // second revert: no-op
        assert_eq!(stage.write_count(), writes);
    }

    #[test]
    fn test_smooth_scrub_chases_target() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();

        engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::TranslateY, 0.0, 100.0, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(
                TriggerConfig::new(section, window).scrub_smooth(0.2),
                timeline,
            );
        });

        engine.on_scroll(&mut stage, 3000.0);
        // No frame yet: playhead has not moved
        assert_eq!(stage.read(section, Property::TranslateY), Some(0.0));

        engine.on_frame(&mut stage, 0.1);
        let mid = stage.read(section, Property::TranslateY).unwrap();
        assert!(mid > 0.0 && mid < 100.0, "expected partial chase, got {}", mid);

        let mut frames = 0;
        while engine.on_frame(&mut stage, 0.1) {
            frames += 1;
            assert!(frames < 200, "smooth scrub never settled");
        }
        let settled = stage.read(section, Property::TranslateY).unwrap();
        assert!((settled - 100.0).abs() < 0.5, "got {}", settled);
    }

    #[test]
    fn test_last_registered_binding_wins_conflicts() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let mut engine = engine();

        engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let first = Timeline::new().add(
                Tween::from_to(section, Property::Opacity, 0.0, 0.3, 1.0, Easing::Linear),
                Position::Start,
            );
            let second = Timeline::new().add(
                Tween::from_to(section, Property::Opacity, 0.0, 0.7, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(TriggerConfig::new(section, window).scrub(), first);
            b.trigger(TriggerConfig::new(section, window).scrub(), second);
        });

        engine.on_scroll(&mut stage, 3000.0);
        assert_eq!(stage.read(section, Property::Opacity), Some(0.7));
    }

    #[test]
    fn test_missing_trigger_element_skips_binding() {
        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let ghost = stage.add_element("ghost", Rect::new(0.0, 9000.0, 100.0, 100.0));
        stage.remove_element(ghost);
        let mut engine = engine();

        engine.mount(&mut stage, move |b| {
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            b.trigger(
                TriggerConfig::new(ghost, window).scrub(),
                Timeline::new().add(
                    Tween::to(ghost, Property::Opacity, 0.0, 1.0, Easing::Linear),
                    Position::Start,
                ),
            );
            b.trigger(
                TriggerConfig::new(section, window).scrub(),
                Timeline::new().add(
                    Tween::from_to(section, Property::Opacity, 1.0, 0.5, 1.0, Easing::Linear),
                    Position::Start,
                ),
            );
        });

        assert_eq!(engine.binding_count(), 1);
        engine.on_scroll(&mut stage, 3000.0);
        assert_eq!(stage.read(section, Property::Opacity), Some(0.5));
    }

    #[test]
    fn test_variant_change_reverts_and_rebuilds() {
        use crate::responsive::{Variant, VariantParams};

        let mut stage = HeadlessStage::new();
        let section = long_page(&mut stage);
        let viewport = Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
        };
        let variants = vec![
            Variant {
                name: "narrow".into(),
                min_width: None,
                max_width: Some(768.0),
                params: VariantParams {
                    offset: 40.0,
                    ..VariantParams::default()
                },
            },
            Variant {
                name: "wide".into(),
                min_width: Some(768.0),
                max_width: None,
                params: VariantParams {
                    offset: 100.0,
                    ..VariantParams::default()
                },
            },
        ];
        let responsive = ResponsiveContext::new(variants, &viewport).unwrap();
        let mut engine = ScrollEngine::new(viewport).with_responsive(responsive);

        engine.mount(&mut stage, move |b| {
            let offset = b.params().offset;
            let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), 1000.0);
            let timeline = Timeline::new().add(
                Tween::from_to(section, Property::TranslateY, 0.0, offset, 1.0, Easing::Linear),
                Position::Start,
            );
            b.trigger(TriggerConfig::new(section, window).scrub(), timeline);
        });
        assert_eq!(engine.variant_name(), Some("wide"));

        engine.on_scroll(&mut stage, 3000.0);
        assert_eq!(stage.read(section, Property::TranslateY), Some(100.0));

        engine.on_resize(&mut stage, 400.0, 800.0);
        assert_eq!(engine.variant_name(), Some("narrow"));
        assert_eq!(engine.binding_count(), 1);
        assert_eq!(stage.read(section, Property::TranslateY), Some(40.0));
    }

    #[test]
    fn test_switch_bindings_drive_active_index() {
        let mut stage = HeadlessStage::new();
        let sections: Vec<ElementId> = (0..3)
            .map(|i| {
                stage.add_element(
                    format!("text-{}", i),
                    Rect::new(0.0, 2000.0 + i as f32 * 900.0, 600.0, 800.0),
                )
            })
            .collect();
        let layers: Vec<ElementId> = (0..3)
            .map(|i| {
                stage.add_element(format!("visual-{}", i), Rect::new(640.0, 0.0, 600.0, 800.0))
            })
            .collect();
        stage.add_element("tail", Rect::new(0.0, 6000.0, 1280.0, 9000.0));
        let mut engine = engine();

        let sections_mount = sections.clone();
        let layers_mount = layers.clone();
        engine.mount(&mut stage, move |b| {
            let window =
                TriggerWindow::new(ThresholdSpec::top_center(), ThresholdSpec::bottom_center());
            b.active_index(
                &sections_mount,
                window,
                SwitcherConfig::new(layers_mount.clone()),
            );
        });

        // Scroll the middle section into its window
        engine.on_scroll(&mut stage, 2900.0 - 400.0 + 100.0);
        while engine.on_frame(&mut stage, 0.1) {}
        assert_eq!(stage.read(layers[1], Property::Opacity), Some(1.0));
        assert_eq!(stage.read(layers[0], Property::Opacity), Some(0.0));
        assert_eq!(stage.read(layers[2], Property::Opacity), Some(0.0));
    }
}
