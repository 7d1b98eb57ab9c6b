//! On-circle point state.
//!
//! Coordinates are offsets from the circle centre in the layout's screen
//! convention. They start as rounded integers and become fractional once a
//! rotation has written interpolated positions back.

use crate::model::page::PageId;
use serde::{Deserialize, Serialize};

/// Current planar position of one page's point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PageId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: PageId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Distance from the circle centre.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Conventional polar angle, `atan2(y, x)`, in degrees.
    pub fn polar_angle_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Angle measured from the vertical axis, `atan2(x, y)`, in degrees.
    ///
    /// The swapped argument order is the layout's convention for locating the
    /// canonical slot; do not replace it with [`Point::polar_angle_deg`].
    pub fn vertical_angle_deg(&self) -> f64 {
        self.x.atan2(self.y).to_degrees()
    }

    /// Moves the point to `angle_deg` on a circle of `radius`.
    pub fn place_polar(&mut self, radius: f64, angle_deg: f64) {
        let radians = angle_deg.to_radians();
        self.x = radius * radians.cos();
        self.y = radius * radians.sin();
    }
}
