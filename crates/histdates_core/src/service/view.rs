//! Render snapshot handed to the drawing layer each frame.

use crate::animation::hover::PointVisual;
use crate::model::page::{Article, PageId};
use serde::Serialize;

/// One point element on the circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointView {
    pub id: PageId,
    /// Offset from the circle centre.
    pub x: f64,
    pub y: f64,
    /// Translation inside the circle's box, `(radius - x, radius - y)`.
    pub translate_x: f64,
    pub translate_y: f64,
    pub active: bool,
    /// Number shown on the point's button.
    pub label: String,
    pub visual: PointVisual,
}

/// One pagination dot below the page counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationDot {
    pub id: PageId,
    pub active: bool,
}

/// Article slider for the active page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub articles: Vec<Article>,
    pub slides_per_view: f64,
    pub space_between: f64,
    pub index: usize,
    pub show_prev: bool,
    pub show_next: bool,
}

/// Everything needed to draw one frame of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub title: String,
    pub points: Vec<PointView>,
    pub year_from: i32,
    pub year_to: i32,
    pub pagination_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub dots: Vec<PaginationDot>,
    pub articles_opacity: f64,
    pub carousel: CarouselView,
    /// Whether another frame is needed to finish running animations.
    pub animating: bool,
}

/// Page counter label, e.g. `03 / 06`.
pub fn pagination_label(selected: PageId, total: PageId) -> String {
    format!("{selected:02} / {total:02}")
}
