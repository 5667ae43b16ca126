//! Floating gallery
//!
//! Images drift upward at different rates as the section scrolls through
//! (smoothed scrub, so the parallax trails the wheel slightly) while a slow
//! side-to-side float loops on the frame clock. The headline clip-reveals
//! once on first entry.

use skroll_animation::{Easing, Position, Timeline, Tween};
use skroll_core::Property;
use skroll_trigger::{
    SceneBuilder, ThresholdSpec, ToggleActions, TriggerConfig, TriggerWindow,
};

use crate::content::PageElements;

/// Smoothing time constant for the parallax scrub
const PARALLAX_LAG: f32 = 0.3;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    let offset = b.params().offset;

    b.stage().write(page.gallery_headline, Property::ClipInset, 1.0);
    let headline_window =
        TriggerWindow::new(ThresholdSpec::top_at(0.75), ThresholdSpec::bottom_top());
    let headline = Timeline::new().add(
        Tween::from_to(
            page.gallery_headline,
            Property::ClipInset,
            1.0,
            0.0,
            1.2,
            Easing::PowerOut(4),
        ),
        Position::Start,
    );
    b.trigger(
        TriggerConfig::new(page.gallery_headline, headline_window)
            .toggle_actions(ToggleActions::play_once()),
        headline,
    );

    for (i, &image) in page.gallery_images.iter().enumerate() {
        let window = TriggerWindow::new(ThresholdSpec::top_bottom(), ThresholdSpec::bottom_top());
        let drift = -((i + 1) as f32) * offset;
        let parallax = Timeline::new().add(
            Tween::from_to(image, Property::TranslateY, 0.0, drift, 1.0, Easing::Linear),
            Position::Start,
        );
        b.trigger(
            TriggerConfig::new(image, window).scrub_smooth(PARALLAX_LAG),
            parallax,
        );

        // Endless float on a different axis, so it never fights the parallax
        let sway = if i % 2 == 0 { 14.0 } else { -14.0 };
        let float = Timeline::new()
            .add(
                Tween::by(image, Property::TranslateX, sway, 2.0 + i as f32 * 0.3, Easing::SineInOut),
                Position::Start,
            )
            .repeat(-1)
            .yoyo(true);
        b.play(float);
    }
}
