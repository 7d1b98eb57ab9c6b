//! Even circular layout of page points.

use crate::model::page::PageId;
use crate::model::point::Point;
use std::f64::consts::TAU;

/// Default angle of point 1, in radians. Places page 1 in the canonical slot.
pub const BASE_OFFSET_RAD: f64 = -4.19;

/// Lays out `count` points on a circle of `radius`.
///
/// Point `k` (0-based) sits at `k * 2π/count + base_offset_rad` and gets id
/// `k + 1`. Coordinates are rounded to whole pixels.
pub fn generate_circle_points(count: usize, radius: f64, base_offset_rad: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count)
        .map(|index| {
            let angle = index as f64 * step + base_offset_rad;
            Point::new(
                point_id(index),
                (angle.cos() * radius).round(),
                (angle.sin() * radius).round(),
            )
        })
        .collect()
}

/// Translation applied to a point element inside the circle's box.
///
/// The circle's bounding box starts at the top-left corner, so a point at
/// offset `(x, y)` from the centre is drawn at `(radius - x, radius - y)`.
pub fn point_translation(point: &Point, radius: f64) -> (f64, f64) {
    (radius - point.x, radius - point.y)
}

fn point_id(index: usize) -> PageId {
    PageId::try_from(index + 1).unwrap_or(PageId::MAX)
}
