//! Core view logic for the historical dates timeline.
//! This crate owns selection state, circle geometry and animation; rendering
//! layers only draw the snapshots it produces.

pub mod animation;
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;

pub use animation::easing::Easing;
pub use animation::hover::PointVisual;
pub use catalog::{CatalogError, CatalogResult, PageCatalog};
pub use config::{ConfigError, ConfigResult, TimelineConfig, CONFIG_PATH_ENV, PAGES_PATH_ENV};
pub use geometry::layout::{generate_circle_points, BASE_OFFSET_RAD};
pub use geometry::rotation::{plan_rotation, RotationPlan, CANONICAL_ANGLE_DEG};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::page::{Article, Page, PageId};
pub use model::point::Point;
pub use service::timeline_service::TimelineService;
pub use service::view::{CarouselView, PaginationDot, PointView, TimelineView};
pub use state::selection::{NavAction, SelectionChange, SelectionState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
