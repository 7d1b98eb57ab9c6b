//! Rigid rotation toward the canonical slot.
//!
//! # Invariants
//! - Every point rotates by the same delta, so relative spacing is preserved.
//! - Per-point radius and start angle are read from current positions at plan
//!   time, never cached across plans.
//! - The selected point's angle is measured with `atan2(x, y)`; the rest use
//!   the conventional `atan2(y, x)`.

use crate::model::page::PageId;
use crate::model::point::Point;

/// Default canonical slot, in degrees from the vertical axis.
pub const CANONICAL_ANGLE_DEG: f64 = -30.0;

/// Rotation target for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTrack {
    pub id: PageId,
    pub radius: f64,
    /// Conventional polar angle at plan time, in degrees.
    pub start_deg: f64,
    /// `start_deg + delta`.
    pub end_deg: f64,
}

/// Full rotation computed for one selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationPlan {
    /// Signed rotation in degrees applied to every point.
    pub delta_deg: f64,
    /// Whether a point matching the selection was found.
    pub target_found: bool,
    pub tracks: Vec<PointTrack>,
}

/// Degrees the whole configuration must turn so `selection` lands on
/// `canonical_deg`. Returns `None` when no point carries that id.
pub fn rotation_delta_deg(points: &[Point], selection: PageId, canonical_deg: f64) -> Option<f64> {
    let target = points.iter().find(|point| point.id == selection)?;
    let angle = target.vertical_angle_deg();
    let delta = if angle > canonical_deg {
        angle - canonical_deg
    } else {
        -(canonical_deg - angle)
    };
    Some(delta)
}

/// Plans the rotation of every point for a new selection.
///
/// An unknown selection yields a zero delta; tracks are still produced so the
/// animation runs without net movement.
pub fn plan_rotation(points: &[Point], selection: PageId, canonical_deg: f64) -> RotationPlan {
    let found = rotation_delta_deg(points, selection, canonical_deg);
    let delta_deg = found.unwrap_or(0.0);
    let tracks = points
        .iter()
        .map(|point| {
            let start_deg = point.polar_angle_deg();
            PointTrack {
                id: point.id,
                radius: point.radius(),
                start_deg,
                end_deg: start_deg + delta_deg,
            }
        })
        .collect();

    RotationPlan {
        delta_deg,
        target_found: found.is_some(),
        tracks,
    }
}
