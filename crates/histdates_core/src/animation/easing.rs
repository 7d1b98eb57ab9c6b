//! Easing curves for frame-driven tweens.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized tween progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic ease-out; the default curve for every timeline tween.
    #[default]
    Power1Out,
    Power1InOut,
    EaseOutCubic,
}

impl Easing {
    /// Maps raw progress to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn all_curves_pin_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Power1Out,
            Easing::Power1InOut,
            Easing::EaseOutCubic,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn power1_out_front_loads_motion() {
        assert_eq!(Easing::Power1Out.apply(0.5), 0.75);
        assert_eq!(Easing::Power1Out.apply(-3.0), 0.0);
        assert_eq!(Easing::Power1Out.apply(7.0), 1.0);
    }
}
