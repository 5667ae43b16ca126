//! Tweens
//!
//! A [`Tween`] is one animation step: a single property of a single element
//! interpolated between two endpoints over a duration, through an easing
//! curve. Endpoints may be absolute, relative to the element's current value,
//! or "whatever the value is when the step first applies" — the latter two
//! are resolved once, on first application, and stay fixed afterwards so that
//! scrubbing back and forth is reproducible.

use skroll_core::{ElementId, Property};

use crate::easing::Easing;

/// One endpoint of a tween
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenValue {
    /// The element's property value at the moment the step first applies
    Current,
    /// An absolute value
    Abs(f32),
    /// Current value plus a delta, latched on first application
    Rel(f32),
}

impl TweenValue {
    fn resolve(self, current: f32) -> f32 {
        match self {
            TweenValue::Current => current,
            TweenValue::Abs(value) => value,
            TweenValue::Rel(delta) => current + delta,
        }
    }
}

/// Start/end pair latched from the stage on first application
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ResolvedSpan {
    pub start: f32,
    pub end: f32,
}

/// A single animation step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub element: ElementId,
    pub property: Property,
    pub from: TweenValue,
    pub to: TweenValue,
    /// Seconds of timeline-local time; 0 applies instantaneously
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    /// Animate from the current value to an absolute target
    pub fn to(element: ElementId, property: Property, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            element,
            property,
            from: TweenValue::Current,
            to: TweenValue::Abs(to),
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Animate from an absolute start back to the current value
    pub fn from(element: ElementId, property: Property, from: f32, duration: f32, easing: Easing) -> Self {
        Self {
            element,
            property,
            from: TweenValue::Abs(from),
            to: TweenValue::Current,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Animate between two absolute values
    pub fn from_to(
        element: ElementId,
        property: Property,
        from: f32,
        to: f32,
        duration: f32,
        easing: Easing,
    ) -> Self {
        Self {
            element,
            property,
            from: TweenValue::Abs(from),
            to: TweenValue::Abs(to),
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Animate from the current value by a relative delta
    pub fn by(element: ElementId, property: Property, delta: f32, duration: f32, easing: Easing) -> Self {
        Self {
            element,
            property,
            from: TweenValue::Current,
            to: TweenValue::Rel(delta),
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Write a value instantaneously (zero duration, no easing)
    pub fn set(element: ElementId, property: Property, value: f32) -> Self {
        Self {
            element,
            property,
            from: TweenValue::Abs(value),
            to: TweenValue::Abs(value),
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Latch both endpoints against the element's current value
    pub(crate) fn resolve(&self, current: f32) -> ResolvedSpan {
        ResolvedSpan {
            start: self.from.resolve(current),
            end: self.to.resolve(current),
        }
    }

    /// Interpolated value at a step-local progress ratio in [0, 1]
    pub(crate) fn value_at(&self, span: ResolvedSpan, progress: f32) -> f32 {
        let eased = self.easing.apply(progress);
        span.start + (span.end - span.start) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skroll_core::{HeadlessStage, Rect, Stage};

    fn element() -> (HeadlessStage, ElementId) {
        let mut stage = HeadlessStage::new();
        let id = stage.add_element("el", Rect::new(0.0, 0.0, 100.0, 100.0));
        (stage, id)
    }

    #[test]
    fn test_interpolation_hits_endpoints_exactly() {
        let (_stage, id) = element();
        let tween = Tween::from_to(id, Property::Opacity, 0.2, 0.8, 1.0, Easing::PowerOut(2));
        let span = tween.resolve(1.0);
        assert_eq!(tween.value_at(span, 0.0), 0.2);
        assert_eq!(tween.value_at(span, 1.0), 0.8);
    }

    #[test]
    fn test_linear_midpoint() {
        let (_stage, id) = element();
        let tween = Tween::from_to(id, Property::Opacity, 0.0, 1.0, 1.0, Easing::Linear);
        let span = tween.resolve(0.0);
        assert_eq!(tween.value_at(span, 0.5), 0.5);
    }

    #[test]
    fn test_from_latches_current_as_end() {
        let (mut stage, id) = element();
        stage.write(id, Property::TranslateY, 12.0);
        let tween = Tween::from(id, Property::TranslateY, 100.0, 1.0, Easing::Linear);
        let span = tween.resolve(stage.read(id, Property::TranslateY).unwrap());
        assert_eq!(span.start, 100.0);
        assert_eq!(span.end, 12.0);
    }

    #[test]
    fn test_relative_target() {
        let (_stage, id) = element();
        let tween = Tween::by(id, Property::TranslateY, 30.0, 2.0, Easing::SineInOut);
        let span = tween.resolve(5.0);
        assert_eq!(span.start, 5.0);
        assert_eq!(span.end, 35.0);
    }

    #[test]
    fn test_set_is_instantaneous() {
        let (_stage, id) = element();
        let tween = Tween::set(id, Property::Opacity, 0.0);
        assert_eq!(tween.duration, 0.0);
        let span = tween.resolve(1.0);
        assert_eq!(tween.value_at(span, 1.0), 0.0);
    }
}
