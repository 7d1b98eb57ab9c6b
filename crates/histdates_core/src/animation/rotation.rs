//! Rotation animator writing interpolated point positions.

use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use crate::geometry::rotation::RotationPlan;
use crate::model::page::PageId;
use crate::model::point::Point;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone)]
struct AngleTrack {
    radius: f64,
    angle: Tween,
}

/// Drives every point's polar angle along a [`RotationPlan`].
#[derive(Debug, Clone, Default)]
pub struct RotationAnimator {
    tracks: BTreeMap<PageId, AngleTrack>,
}

impl RotationAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) every point listed in `plan`.
    ///
    /// Tracks already in flight for the same point are replaced; the plan was
    /// computed from the positions those tracks last wrote.
    pub fn start(&mut self, plan: &RotationPlan, duration: Duration, easing: Easing) {
        for track in &plan.tracks {
            self.tracks.insert(
                track.id,
                AngleTrack {
                    radius: track.radius,
                    angle: Tween::new(track.start_deg, track.end_deg, duration, easing),
                },
            );
        }
    }

    /// Advances all tracks and writes positions into `points`.
    ///
    /// Points without a track are left untouched. Returns whether any track is
    /// still running afterwards.
    pub fn step(&mut self, dt: Duration, points: &mut [Point]) -> bool {
        for point in points.iter_mut() {
            if let Some(track) = self.tracks.get_mut(&point.id) {
                let angle = track.angle.advance(dt);
                point.place_polar(track.radius, angle);
            }
        }
        self.tracks.retain(|_, track| !track.angle.is_finished());
        !self.tracks.is_empty()
    }

    pub fn is_active(&self) -> bool {
        !self.tracks.is_empty()
    }
}
