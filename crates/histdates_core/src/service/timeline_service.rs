//! Timeline controller.
//!
//! # Responsibility
//! - Own selection, point positions and every animator for one timeline.
//! - Turn interactions into reducer actions and start the coupled
//!   rotation + counter animations for each committed transition.
//! - Advance animations on host frames and expose render snapshots.
//!
//! # Invariants
//! - Exactly one point is active and its id equals the selection.
//! - Point ids are exactly the catalog's page ids; the count never changes.
//! - Rotation and counters are always started together.

use crate::animation::counter::CounterAnimator;
use crate::animation::fade::FadeAnimator;
use crate::animation::hover::{HoverAnimator, PointVisual};
use crate::animation::rotation::RotationAnimator;
use crate::catalog::PageCatalog;
use crate::config::{ConfigResult, TimelineConfig};
use crate::geometry::layout::{generate_circle_points, point_translation};
use crate::geometry::rotation::plan_rotation;
use crate::model::page::{Page, PageId};
use crate::model::point::Point;
use crate::service::view::{
    pagination_label, CarouselView, PaginationDot, PointView, TimelineView,
};
use crate::state::carousel::CarouselState;
use crate::state::selection::{reduce, NavAction, SelectionChange, SelectionState};
use log::{debug, info};
use std::time::Duration;

/// Stateful controller behind one rendered timeline.
#[derive(Debug, Clone)]
pub struct TimelineService {
    catalog: PageCatalog,
    config: TimelineConfig,
    selection: SelectionState,
    points: Vec<Point>,
    rotation: RotationAnimator,
    counters: CounterAnimator,
    fade: FadeAnimator,
    hover: HoverAnimator,
    carousel: CarouselState,
    viewport_width: u32,
}

impl TimelineService {
    /// Mounts a timeline: lays out points once, selects page 1 and starts the
    /// counters (from 0) and the articles fade-in.
    ///
    /// Page 1 is laid out in the canonical slot, so mounting does not rotate.
    ///
    /// # Errors
    /// - Returns an error when `config` fails validation.
    pub fn new(
        catalog: PageCatalog,
        config: TimelineConfig,
        viewport_width: u32,
    ) -> ConfigResult<Self> {
        config.validate()?;

        let points = generate_circle_points(catalog.len(), config.radius, config.base_offset_rad);
        let selection = SelectionState::new(catalog.last_id());
        let hover = HoverAnimator::new(points.iter().map(|point| point.id), selection.selected());
        let carousel = CarouselState::new(0, config.slides_per_view(viewport_width));
        let fade = FadeAnimator::new(config.fade_step(), config.easing);

        let mut service = Self {
            catalog,
            config,
            selection,
            points,
            rotation: RotationAnimator::new(),
            counters: CounterAnimator::default(),
            fade,
            hover,
            carousel,
            viewport_width,
        };
        service.show_page(service.selection.selected());

        info!(
            "event=timeline_mount module=timeline status=ok pages={} radius={} viewport_width={}",
            service.catalog.len(),
            service.config.radius,
            viewport_width
        );
        Ok(service)
    }

    /// Applies one navigation action.
    ///
    /// Returns the committed transition, or `None` when the action was a
    /// no-op (already active, out of range, or at an edge).
    pub fn dispatch(&mut self, action: NavAction) -> Option<SelectionChange> {
        let Some((next, change)) = reduce(self.selection, action) else {
            debug!(
                "event=nav_ignored module=timeline action={:?} selected={}",
                action,
                self.selection.selected()
            );
            return None;
        };
        self.selection = next;

        let plan = plan_rotation(&self.points, change.to, self.config.canonical_angle_deg);
        self.rotation
            .start(&plan, self.config.rotation_duration(), self.config.easing);
        self.show_page(change.to);
        self.hover.snap(change.from, PointVisual::IDLE);
        self.hover.snap(change.to, PointVisual::EXPANDED);

        debug!(
            "event=selection_change module=timeline from={} to={} delta_deg={:.3} target_found={}",
            change.from, change.to, plan.delta_deg, plan.target_found
        );
        Some(change)
    }

    /// Point or pagination-dot click.
    pub fn select(&mut self, id: PageId) -> Option<SelectionChange> {
        self.dispatch(NavAction::Select(id))
    }

    /// "Previous page" button.
    pub fn previous_page(&mut self) -> Option<SelectionChange> {
        self.dispatch(NavAction::Previous)
    }

    /// "Next page" button.
    pub fn next_page(&mut self) -> Option<SelectionChange> {
        self.dispatch(NavAction::Next)
    }

    /// Expands a hovered point. The active point and unknown ids are ignored.
    ///
    /// Returns whether an animation started.
    pub fn hover_enter(&mut self, id: PageId) -> bool {
        self.animate_hover(id, PointVisual::EXPANDED)
    }

    /// Collapses a point the pointer left. The active point and unknown ids are ignored.
    pub fn hover_leave(&mut self, id: PageId) -> bool {
        self.animate_hover(id, PointVisual::IDLE)
    }

    /// Returns whether the slider moved.
    pub fn carousel_next(&mut self) -> bool {
        self.carousel.slide_next()
    }

    /// Returns whether the slider moved.
    pub fn carousel_prev(&mut self) -> bool {
        self.carousel.slide_prev()
    }

    /// Applies a new viewport width to the responsive carousel.
    ///
    /// Returns `false` when the width is unchanged.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        if viewport_width == self.viewport_width {
            return false;
        }
        self.viewport_width = viewport_width;
        self.carousel
            .set_slides_per_view(self.config.slides_per_view(viewport_width));
        true
    }

    /// Advances every animator by one frame delta.
    ///
    /// Returns whether any animation is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.rotation.step(dt, &mut self.points);
        self.counters.step(dt);
        self.fade.step(dt);
        self.hover.step(dt);
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.rotation.is_active()
            || self.counters.is_active()
            || self.fade.is_active()
            || self.hover.is_active()
    }

    pub fn selection(&self) -> PageId {
        self.selection.selected()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.catalog.page(self.selection.selected())
    }

    /// Displayed `(year_from, year_to)` counters.
    pub fn displayed_years(&self) -> (i32, i32) {
        self.counters.displayed()
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    /// Builds the render snapshot for the current frame.
    pub fn view(&self) -> TimelineView {
        let selected = self.selection.selected();
        let radius = self.config.radius;
        let points = self
            .points
            .iter()
            .map(|point| {
                let (translate_x, translate_y) = point_translation(point, radius);
                let active = point.id == selected;
                PointView {
                    id: point.id,
                    x: point.x,
                    y: point.y,
                    translate_x,
                    translate_y,
                    active,
                    label: point.id.to_string(),
                    visual: self.hover.visual(point.id).unwrap_or(if active {
                        PointVisual::EXPANDED
                    } else {
                        PointVisual::IDLE
                    }),
                }
            })
            .collect();
        let dots = self
            .points
            .iter()
            .map(|point| PaginationDot {
                id: point.id,
                active: point.id == selected,
            })
            .collect();
        let (year_from, year_to) = self.counters.displayed();
        let articles = self
            .active_page()
            .map(|page| page.articles.clone())
            .unwrap_or_default();

        TimelineView {
            title: self.config.title.clone(),
            points,
            year_from,
            year_to,
            pagination_label: pagination_label(selected, self.selection.page_count()),
            prev_enabled: self.selection.can_go_previous(),
            next_enabled: self.selection.can_go_next(),
            dots,
            articles_opacity: self.fade.opacity(),
            carousel: CarouselView {
                articles,
                slides_per_view: self.carousel.slides_per_view(),
                space_between: self.config.slide_spacing_px,
                index: self.carousel.index(),
                show_prev: !self.carousel.is_beginning(),
                show_next: !self.carousel.is_end(),
            },
            animating: self.is_animating(),
        }
    }

    /// Retargets counters, restarts the fade and swaps carousel slides.
    fn show_page(&mut self, id: PageId) {
        let Some(page) = self.catalog.page(id) else {
            return;
        };
        self.counters.start(
            page.year_from,
            page.year_to,
            self.config.counter_duration(),
            self.config.easing,
        );
        self.carousel.reset(page.articles.len());
        self.fade.start();
    }

    fn animate_hover(&mut self, id: PageId, target: PointVisual) -> bool {
        if id == self.selection.selected() || self.hover.visual(id).is_none() {
            return false;
        }
        self.hover
            .animate(id, target, self.config.hover_duration(), self.config.easing);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineService;
    use crate::catalog::PageCatalog;
    use crate::config::TimelineConfig;
    use std::time::Duration;

    fn mounted() -> TimelineService {
        let catalog = PageCatalog::builtin().expect("builtin catalog");
        TimelineService::new(catalog, TimelineConfig::default(), 1440).expect("mount")
    }

    #[test]
    fn mount_animates_counters_without_rotating() {
        let mut service = mounted();
        let initial_points = service.points().to_vec();
        assert_eq!(service.displayed_years(), (0, 0));
        assert!(service.is_animating());

        while service.tick(Duration::from_millis(16)) {}
        assert_eq!(service.points(), initial_points.as_slice());
        assert_eq!(service.displayed_years(), (1980, 1986));
    }

    #[test]
    fn rejects_invalid_config() {
        let catalog = PageCatalog::builtin().expect("builtin catalog");
        let config = TimelineConfig {
            radius: -1.0,
            ..TimelineConfig::default()
        };
        assert!(TimelineService::new(catalog, config, 1440).is_err());
    }
}
