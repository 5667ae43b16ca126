//! Reveal blocks
//!
//! Copy blocks that fade and rise in when they reach 80% down the viewport,
//! and undo themselves when scrolled back out above — the "play none none
//! reverse" idiom.

use skroll_animation::{Easing, Position, Timeline, Tween};
use skroll_core::Property;
use skroll_trigger::{
    SceneBuilder, ThresholdSpec, ToggleActions, TriggerConfig, TriggerWindow,
};

use crate::content::PageElements;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    let rise = b.params().offset * 0.6;
    for &block in &page.reveal_blocks {
        b.stage().write(block, Property::Opacity, 0.0);
        b.stage().write(block, Property::TranslateY, rise);

        let window = TriggerWindow::new(ThresholdSpec::top_at(0.8), ThresholdSpec::bottom_top());
        let timeline = Timeline::new()
            .add(
                Tween::from_to(block, Property::Opacity, 0.0, 1.0, 1.0, Easing::PowerOut(3)),
                Position::Start,
            )
            .add(
                Tween::from_to(block, Property::TranslateY, rise, 0.0, 1.0, Easing::PowerOut(3)),
                Position::At(0.0),
            );
        b.trigger(
            TriggerConfig::new(block, window).toggle_actions(ToggleActions::play_reverse()),
            timeline,
        );
    }
}
