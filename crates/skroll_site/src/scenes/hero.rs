//! Hero entrance
//!
//! Headline lines rise in one after another when the page mounts, staggered,
//! with a back-out overshoot. This is the one scene driven purely by the
//! frame clock rather than scroll.

use skroll_animation::{Easing, Position, Timeline, Tween};
use skroll_core::Property;
use skroll_trigger::SceneBuilder;

use crate::content::PageElements;

/// Delay before the first line moves, leaving room for the intro to clear
const LEAD_IN: f32 = 0.4;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    let params = b.params();
    for &line in &page.hero_lines {
        b.stage().write(line, Property::Opacity, 0.0);
        b.stage().write(line, Property::TranslateY, params.offset);
    }

    let mut timeline = Timeline::new();
    for (i, &line) in page.hero_lines.iter().enumerate() {
        let at = LEAD_IN + i as f32 * params.stagger;
        timeline = timeline
            .add(
                Tween::to(line, Property::Opacity, 1.0, 1.0, Easing::PowerOut(3)),
                Position::At(at),
            )
            .add(
                Tween::to(line, Property::TranslateY, 0.0, 1.0, Easing::back_out()),
                Position::At(at),
            );
    }
    b.play(timeline);
}
