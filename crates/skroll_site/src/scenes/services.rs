//! Services section
//!
//! Text blocks scroll past on the left while the visual panel stays pinned
//! on the right. Each text block's center-of-viewport window drives the
//! active-index switcher, cross-fading the panel's layers so exactly one
//! visual is visible for the block the reader is on.

use skroll_animation::Timeline;
use skroll_trigger::{
    SceneBuilder, SwitcherConfig, ThresholdSpec, ToggleActions, TriggerConfig, TriggerWindow,
};

use crate::content::PageElements;

pub fn build(b: &mut SceneBuilder<'_, '_>, page: &PageElements) {
    if page.service_texts.is_empty() {
        return;
    }
    // Hold the panel for the whole text run
    let distance = page.service_texts.len() as f32 * b.viewport().height;
    let hold = TriggerWindow::with_distance(ThresholdSpec::top_top(), distance);
    b.trigger(
        TriggerConfig::new(page.services_panel, hold)
            .toggle_actions(ToggleActions::default())
            .pin(),
        Timeline::new(),
    );

    let window = TriggerWindow::new(ThresholdSpec::top_center(), ThresholdSpec::bottom_center());
    b.active_index(
        &page.service_texts,
        window,
        SwitcherConfig::new(page.service_visuals.clone()),
    );
}
