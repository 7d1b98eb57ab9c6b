//! Per-point hover and active visuals.

use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use crate::model::page::PageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Size, offset and overlaid button state of one point element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointVisual {
    /// Width and height in px.
    pub size: f64,
    /// Left/top offset in px that keeps the element centred on its position.
    pub offset: f64,
    pub button_opacity: f64,
    pub button_scale: f64,
}

impl PointVisual {
    /// Resting, non-selected point: a small dot with the number hidden.
    pub const IDLE: Self = Self {
        size: 5.0,
        offset: -2.5,
        button_opacity: 0.0,
        button_scale: 0.0,
    };

    /// Hovered or selected point: full-size circle showing its number.
    pub const EXPANDED: Self = Self {
        size: 20.0,
        offset: -10.0,
        button_opacity: 1.0,
        button_scale: 1.0,
    };

    pub fn lerp(self, to: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            size: mix(self.size, to.size),
            offset: mix(self.offset, to.offset),
            button_opacity: mix(self.button_opacity, to.button_opacity),
            button_scale: mix(self.button_scale, to.button_scale),
        }
    }
}

#[derive(Debug, Clone)]
struct VisualTrack {
    current: PointVisual,
    from: PointVisual,
    to: PointVisual,
    progress: Option<Tween>,
}

impl VisualTrack {
    fn resting(visual: PointVisual) -> Self {
        Self {
            current: visual,
            from: visual,
            to: visual,
            progress: None,
        }
    }
}

/// Animates point visuals on hover enter/leave.
#[derive(Debug, Clone, Default)]
pub struct HoverAnimator {
    tracks: BTreeMap<PageId, VisualTrack>,
}

impl HoverAnimator {
    /// Creates resting visuals for `ids`, with `active` expanded.
    pub fn new(ids: impl IntoIterator<Item = PageId>, active: PageId) -> Self {
        let tracks = ids
            .into_iter()
            .map(|id| {
                let visual = if id == active {
                    PointVisual::EXPANDED
                } else {
                    PointVisual::IDLE
                };
                (id, VisualTrack::resting(visual))
            })
            .collect();
        Self { tracks }
    }

    /// Tweens `id` toward `target` from its current visual. Unknown ids are ignored.
    pub fn animate(&mut self, id: PageId, target: PointVisual, duration: Duration, easing: Easing) {
        let Some(track) = self.tracks.get_mut(&id) else {
            return;
        };
        track.from = track.current;
        track.to = target;
        track.progress = Some(Tween::new(0.0, 1.0, duration, easing));
    }

    /// Sets `id` to `visual` immediately, cancelling any tween.
    pub fn snap(&mut self, id: PageId, visual: PointVisual) {
        if let Some(track) = self.tracks.get_mut(&id) {
            *track = VisualTrack::resting(visual);
        }
    }

    /// Advances every tween; returns whether any is still running.
    pub fn step(&mut self, dt: Duration) -> bool {
        let mut running = false;
        for track in self.tracks.values_mut() {
            let Some(progress) = track.progress.as_mut() else {
                continue;
            };
            let t = progress.advance(dt);
            track.current = track.from.lerp(track.to, t);
            if progress.is_finished() {
                track.current = track.to;
                track.progress = None;
            } else {
                running = true;
            }
        }
        running
    }

    pub fn visual(&self, id: PageId) -> Option<PointVisual> {
        self.tracks.get(&id).map(|track| track.current)
    }

    pub fn is_active(&self) -> bool {
        self.tracks.values().any(|track| track.progress.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverAnimator, PointVisual};
    use crate::animation::easing::Easing;
    use std::time::Duration;

    #[test]
    fn active_point_starts_expanded() {
        let hover = HoverAnimator::new(1..=3, 2);
        assert_eq!(hover.visual(2), Some(PointVisual::EXPANDED));
        assert_eq!(hover.visual(1), Some(PointVisual::IDLE));
        assert_eq!(hover.visual(9), None);
    }

    #[test]
    fn leave_mid_enter_reverses_from_current_visual() {
        let mut hover = HoverAnimator::new(1..=3, 1);
        let duration = Duration::from_millis(300);
        hover.animate(2, PointVisual::EXPANDED, duration, Easing::Linear);
        hover.step(Duration::from_millis(150));
        let halfway = hover.visual(2).expect("point 2");
        assert_eq!(halfway.size, 12.5);

        hover.animate(2, PointVisual::IDLE, duration, Easing::Linear);
        assert_eq!(hover.visual(2), Some(halfway));
        assert!(!hover.step(duration));
        assert_eq!(hover.visual(2), Some(PointVisual::IDLE));
    }
}
