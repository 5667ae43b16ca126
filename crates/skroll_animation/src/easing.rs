//! Easing functions
//!
//! Pure, stateless curves mapping a progress ratio in [0, 1] to an eased
//! ratio. Most curves stay inside [0, 1]; `BackOut` deliberately overshoots
//! past 1 before settling, which is the point of it.
//!
//! The power family takes an exponent (2 = quadratic, 3 = cubic, 5 = quintic)
//! rather than one variant per degree.

use std::f32::consts::PI;

/// An easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing; progress passes through unchanged
    Linear,
    /// Accelerating: t^n
    PowerIn(u8),
    /// Decelerating: 1 - (1-t)^n
    PowerOut(u8),
    /// Accelerate then decelerate, symmetric around t = 0.5
    PowerInOut(u8),
    /// Quarter sine wave, gentle start
    SineIn,
    /// Quarter sine wave, gentle stop
    SineOut,
    /// Half sine wave, gentle both ends
    SineInOut,
    /// Decelerating with overshoot; the parameter controls overshoot
    /// amplitude (1.70158 is the classic default)
    BackOut(f32),
}

impl Easing {
    /// Classic back-out overshoot
    pub fn back_out() -> Self {
        Easing::BackOut(1.70158)
    }

    /// Map a progress ratio through the curve
    ///
    /// Input is clamped to [0, 1]; output is exactly 0 at t = 0 and exactly
    /// 1 at t = 1 for every variant.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerIn(n) => t.powi(n.max(1) as i32),
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(n.max(1) as i32),
            Easing::PowerInOut(n) => {
                let n = n.max(1) as i32;
                if t < 0.5 {
                    0.5 * (2.0 * t).powi(n)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
                }
            }
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => 0.5 - 0.5 * (t * PI).cos(),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::PowerIn(2),
        Easing::PowerOut(3),
        Easing::PowerInOut(2),
        Easing::PowerInOut(5),
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackOut(1.70158),
    ];

    #[test]
    fn test_endpoints_exact() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), ease.apply(0.0));
            assert_eq!(ease.apply(1.5), ease.apply(1.0));
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_power_in_out_symmetry() {
        let ease = Easing::PowerInOut(3);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let a = ease.apply(t);
            let b = 1.0 - ease.apply(1.0 - t);
            assert!((a - b).abs() < 1e-5, "asymmetric at t={}", t);
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = Easing::back_out();
        let peak = (0..100)
            .map(|i| ease.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }
}
