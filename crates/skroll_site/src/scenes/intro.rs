//! Intro loader
//!
//! The overlay pins over the first stretch of scroll while the logo zooms
//! until it swallows the screen; a white fade overlaps the last quarter of
//! the zoom. All scrubbed, so the intro runs at the reader's pace and plays
//! backward when they scroll up.

use skroll_animation::{Easing, Position, Timeline, Tween};
use skroll_core::Property;
use skroll_trigger::{SceneBuilder, ThresholdSpec, TriggerConfig, TriggerWindow};

use crate::content::PageElements;

/// Scroll distance the intro occupies
const INTRO_DISTANCE: f32 = 1500.0;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    let zoom = b.params().zoom;
    let window = TriggerWindow::with_distance(ThresholdSpec::top_top(), INTRO_DISTANCE);
    let timeline = Timeline::new()
        .add(
            Tween::from_to(
                page.intro_logo,
                Property::Scale,
                1.0,
                zoom,
                1.0,
                Easing::PowerInOut(2),
            ),
            Position::Start,
        )
        // Fade overlaps the tail of the zoom
        .add(
            Tween::from_to(
                page.intro_overlay,
                Property::Opacity,
                1.0,
                0.0,
                0.25,
                Easing::PowerOut(2),
            ),
            Position::Overlap(0.25),
        );
    b.trigger(
        TriggerConfig::new(page.intro_overlay, window).scrub().pin(),
        timeline,
    );
}
