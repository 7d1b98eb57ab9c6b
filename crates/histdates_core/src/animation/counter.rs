//! Whole-number year counters.

use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use std::time::Duration;

/// One displayed integer that animates with rounded intermediate values.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedCounter {
    displayed: i32,
    tween: Option<Tween>,
}

impl RoundedCounter {
    pub fn new(displayed: i32) -> Self {
        Self {
            displayed,
            tween: None,
        }
    }

    /// Retargets from the currently displayed value.
    pub fn animate_to(&mut self, target: i32, duration: Duration, easing: Easing) {
        let tween = Tween::new(f64::from(self.displayed), f64::from(target), duration, easing);
        if tween.is_finished() {
            self.displayed = target;
            self.tween = None;
            return;
        }
        self.tween = Some(tween);
    }

    /// Advances and returns the displayed value.
    pub fn advance(&mut self, dt: Duration) -> i32 {
        if let Some(tween) = self.tween.as_mut() {
            let value = tween.advance(dt);
            if tween.is_finished() {
                self.displayed = tween.target() as i32;
                self.tween = None;
            } else {
                self.displayed = value.round() as i32;
            }
        }
        self.displayed
    }

    pub fn displayed(&self) -> i32 {
        self.displayed
    }

    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }
}

/// The year-from / year-to pair shown inside the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    from: RoundedCounter,
    to: RoundedCounter,
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl CounterAnimator {
    pub fn new(year_from: i32, year_to: i32) -> Self {
        Self {
            from: RoundedCounter::new(year_from),
            to: RoundedCounter::new(year_to),
        }
    }

    /// Retargets both counters together.
    pub fn start(&mut self, year_from: i32, year_to: i32, duration: Duration, easing: Easing) {
        self.from.animate_to(year_from, duration, easing);
        self.to.animate_to(year_to, duration, easing);
    }

    /// Advances both counters; returns whether either is still running.
    pub fn step(&mut self, dt: Duration) -> bool {
        self.from.advance(dt);
        self.to.advance(dt);
        self.is_active()
    }

    /// Displayed `(year_from, year_to)`.
    pub fn displayed(&self) -> (i32, i32) {
        (self.from.displayed(), self.to.displayed())
    }

    pub fn is_active(&self) -> bool {
        self.from.is_active() || self.to.is_active()
    }
}
