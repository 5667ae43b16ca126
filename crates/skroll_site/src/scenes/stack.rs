//! Project stack
//!
//! The projects section pins while cards slide up one by one and settle into
//! a fanned stack, each offset a little further than the last. Fully
//! scrubbed, with a hold after each card so the stack reads card by card.

use skroll_animation::{Easing, Position, Timeline, Tween};
use skroll_core::Property;
use skroll_trigger::{SceneBuilder, ThresholdSpec, TriggerConfig, TriggerWindow};

use crate::content::PageElements;

/// Scroll distance each card gets, including its hold
const DISTANCE_PER_CARD: f32 = 1000.0;

/// Offscreen start offset for incoming cards
const CARD_RISE: f32 = 150.0;

/// Per-card fan offset in the settled stack
const FAN_STEP: f32 = 40.0;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    if page.stack_cards.is_empty() {
        return;
    }
    for &card in &page.stack_cards {
        b.stage().write(card, Property::TranslateY, CARD_RISE);
        b.stage().write(card, Property::Opacity, 0.0);
    }

    let mut timeline = Timeline::new();
    for (i, &card) in page.stack_cards.iter().enumerate() {
        let fan = i as f32 * FAN_STEP;
        // One slot per card, with a half-slot hold before the next
        let at = i as f32 * 1.5;
        timeline = timeline
            .add(
                Tween::from_to(card, Property::TranslateY, CARD_RISE, fan, 1.0, Easing::PowerOut(2)),
                Position::At(at),
            )
            .add(
                Tween::from_to(card, Property::TranslateX, 0.0, fan, 1.0, Easing::PowerOut(2)),
                Position::At(at),
            )
            .add(
                Tween::from_to(card, Property::Opacity, 0.0, 1.0, 0.4, Easing::PowerOut(2)),
                Position::At(at),
            );
    }

    let distance = page.stack_cards.len() as f32 * DISTANCE_PER_CARD;
    let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), distance);
    b.trigger(
        TriggerConfig::new(page.stack_section, window).scrub().pin(),
        timeline,
    );
}
