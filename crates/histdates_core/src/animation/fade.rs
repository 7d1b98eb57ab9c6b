//! Articles section fade timeline.

use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use std::collections::VecDeque;
use std::time::Duration;

/// Opacity targets played in order on every page change.
const FADE_SEQUENCE: [f64; 3] = [1.0, 0.0, 1.0];

/// Sequential opacity timeline: each step tweens from wherever the previous
/// one ended. Leftover frame time carries into the next step.
#[derive(Debug, Clone)]
pub struct FadeAnimator {
    opacity: f64,
    pending: VecDeque<f64>,
    active: Option<Tween>,
    step_duration: Duration,
    easing: Easing,
}

impl FadeAnimator {
    pub fn new(step_duration: Duration, easing: Easing) -> Self {
        Self {
            opacity: 1.0,
            pending: VecDeque::new(),
            active: None,
            step_duration,
            easing,
        }
    }

    /// Restarts the sequence from the current opacity.
    pub fn start(&mut self) {
        self.active = None;
        self.pending = FADE_SEQUENCE.into_iter().collect();
    }

    /// Advances the timeline; returns whether steps remain.
    pub fn step(&mut self, dt: Duration) -> bool {
        let mut budget = dt;
        loop {
            if self.active.is_none() {
                let Some(target) = self.pending.pop_front() else {
                    break;
                };
                self.active = Some(Tween::new(
                    self.opacity,
                    target,
                    self.step_duration,
                    self.easing,
                ));
            }
            let Some(tween) = self.active.as_mut() else {
                break;
            };
            let slice = budget.min(tween.remaining());
            self.opacity = tween.advance(slice);
            budget = budget.saturating_sub(slice);
            if !tween.is_finished() {
                break;
            }
            self.active = None;
        }
        self.is_active()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some() || !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FadeAnimator;
    use crate::animation::easing::Easing;
    use std::time::Duration;

    #[test]
    fn fade_dips_to_zero_then_recovers() {
        let mut fade = FadeAnimator::new(Duration::from_millis(500), Easing::Linear);
        fade.start();

        assert!(fade.step(Duration::from_millis(500)));
        assert_eq!(fade.opacity(), 1.0);
        assert!(fade.step(Duration::from_millis(250)));
        assert_eq!(fade.opacity(), 0.5);
        assert!(fade.step(Duration::from_millis(250)));
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.step(Duration::from_millis(500)));
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn one_large_frame_runs_whole_sequence() {
        let mut fade = FadeAnimator::new(Duration::from_millis(500), Easing::Power1Out);
        fade.start();
        assert!(!fade.step(Duration::from_secs(10)));
        assert_eq!(fade.opacity(), 1.0);
    }
}
