//! FFI timeline API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose timeline sessions to Dart via FRB as sync, frame-sized calls.
//! - Flatten core snapshots into plain DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Sessions are isolated; an unknown session id is reported, never created.

use histdates_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    PageCatalog, SelectionChange, TimelineConfig, TimelineService, TimelineView, PAGES_PATH_ENV,
};
use log::{info, warn};
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

/// Upper bound for one tick; larger host gaps are clamped.
const MAX_TICK_MS: u32 = 1_000;

static SESSIONS: OnceLock<Mutex<SessionRegistry>> = OnceLock::new();

#[derive(Default)]
struct SessionRegistry {
    next_id: u64,
    sessions: BTreeMap<u64, TimelineService>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result of opening a timeline session.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOpenResponse {
    pub ok: bool,
    pub session_id: Option<u64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// First frame, present on success.
    pub frame: Option<TimelineFrame>,
}

/// Result of one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineActionResponse {
    pub ok: bool,
    /// Whether the interaction changed anything.
    pub changed: bool,
    /// Active page after the call.
    pub selection: u32,
    pub message: String,
}

impl TimelineActionResponse {
    fn applied(changed: bool, selection: u32) -> Self {
        Self {
            ok: true,
            changed,
            selection,
            message: if changed { "Applied." } else { "No change." }.to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            selection: 0,
            message: message.into(),
        }
    }
}

/// One point element, flattened for Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePoint {
    pub id: u32,
    pub label: String,
    pub translate_x: f64,
    pub translate_y: f64,
    pub size: f64,
    pub offset: f64,
    pub button_opacity: f64,
    pub button_scale: f64,
    pub active: bool,
}

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArticle {
    pub year: String,
    pub text: String,
}

/// Everything the Dart side draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub title: String,
    pub points: Vec<FramePoint>,
    pub year_from: i32,
    pub year_to: i32,
    pub pagination_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub dot_ids: Vec<u32>,
    pub active_dot: u32,
    pub articles_opacity: f64,
    pub articles: Vec<FrameArticle>,
    pub slides_per_view: f64,
    pub slide_spacing: f64,
    pub slide_index: u32,
    pub show_slide_prev: bool,
    pub show_slide_next: bool,
    pub animating: bool,
}

/// Opens a timeline session.
///
/// Input semantics:
/// - `pages_json`: optional catalog JSON; when absent, `HISTDATES_PAGES_PATH`
///   is read, then the built-in catalog is used.
/// - `config_json`: optional config overrides; when absent,
///   `HISTDATES_CONFIG_PATH` is read, then defaults are used.
/// - `viewport_width`: logical px, drives the responsive carousel.
///
/// # FFI contract
/// - Sync call; may read one small file.
/// - Never panics; failures return `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_open(
    pages_json: Option<String>,
    config_json: Option<String>,
    viewport_width: u32,
) -> TimelineOpenResponse {
    let catalog = match resolve_catalog(pages_json) {
        Ok(catalog) => catalog,
        Err(message) => return open_failure(format!("timeline_open failed: {message}")),
    };
    let config = match config_json.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match TimelineConfig::from_json_str(raw) {
            Ok(config) => config,
            Err(err) => return open_failure(format!("timeline_open failed: {err}")),
        },
        _ => match TimelineConfig::from_env() {
            Ok(config) => config,
            Err(err) => return open_failure(format!("timeline_open failed: {err}")),
        },
    };
    let service = match TimelineService::new(catalog, config, viewport_width) {
        Ok(service) => service,
        Err(err) => return open_failure(format!("timeline_open failed: {err}")),
    };

    let frame = to_frame(&service.view());
    let inserted = with_registry(|registry| {
        registry.next_id += 1;
        let id = registry.next_id;
        registry.sessions.insert(id, service);
        id
    });
    match inserted {
        Ok(session_id) => {
            info!("event=session_open module=ffi status=ok session_id={session_id}");
            TimelineOpenResponse {
                ok: true,
                session_id: Some(session_id),
                message: "Timeline opened.".to_string(),
                frame: Some(frame),
            }
        }
        Err(message) => open_failure(message),
    }
}

/// Closes a session. Returns whether it existed.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_close(session_id: u64) -> bool {
    with_registry(|registry| registry.sessions.remove(&session_id).is_some()).unwrap_or(false)
}

/// Point or pagination-dot click.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_select(session_id: u64, page_id: u32) -> TimelineActionResponse {
    navigate(session_id, "timeline_select", |service| service.select(page_id))
}

/// "Previous page" button.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_prev(session_id: u64) -> TimelineActionResponse {
    navigate(session_id, "timeline_prev", TimelineService::previous_page)
}

/// "Next page" button.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_next(session_id: u64) -> TimelineActionResponse {
    navigate(session_id, "timeline_next", TimelineService::next_page)
}

/// Pointer entered (`entered=true`) or left a point.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_hover(session_id: u64, page_id: u32, entered: bool) -> TimelineActionResponse {
    with_session(session_id, "timeline_hover", |service| {
        let changed = if entered {
            service.hover_enter(page_id)
        } else {
            service.hover_leave(page_id)
        };
        TimelineActionResponse::applied(changed, service.selection())
    })
}

/// Carousel arrow press.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_carousel_step(session_id: u64, forward: bool) -> TimelineActionResponse {
    with_session(session_id, "timeline_carousel_step", |service| {
        let changed = if forward {
            service.carousel_next()
        } else {
            service.carousel_prev()
        };
        TimelineActionResponse::applied(changed, service.selection())
    })
}

/// Viewport width change.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_resize(session_id: u64, viewport_width: u32) -> TimelineActionResponse {
    with_session(session_id, "timeline_resize", |service| {
        let changed = service.resize(viewport_width);
        TimelineActionResponse::applied(changed, service.selection())
    })
}

/// Advances animations by `elapsed_ms` and returns the new frame.
///
/// # FFI contract
/// - Call once per vsync while `frame.animating` is true.
/// - `elapsed_ms` above one second is clamped.
/// - Returns `None` for unknown sessions.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_tick(session_id: u64, elapsed_ms: u32) -> Option<TimelineFrame> {
    let dt = Duration::from_millis(u64::from(elapsed_ms.min(MAX_TICK_MS)));
    with_registry(|registry| {
        registry.sessions.get_mut(&session_id).map(|service| {
            service.tick(dt);
            to_frame(&service.view())
        })
    })
    .ok()
    .flatten()
}

/// Current frame without advancing time.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_frame(session_id: u64) -> Option<TimelineFrame> {
    with_registry(|registry| {
        registry
            .sessions
            .get(&session_id)
            .map(|service| to_frame(&service.view()))
    })
    .ok()
    .flatten()
}

fn resolve_catalog(pages_json: Option<String>) -> Result<PageCatalog, String> {
    if let Some(raw) = pages_json {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PageCatalog::from_json_str(trimmed).map_err(|err| err.to_string());
        }
    }
    if let Ok(raw) = std::env::var(PAGES_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PageCatalog::load(trimmed).map_err(|err| err.to_string());
        }
    }
    PageCatalog::builtin().map_err(|err| err.to_string())
}

fn open_failure(message: String) -> TimelineOpenResponse {
    warn!("event=session_open module=ffi status=error message={message}");
    TimelineOpenResponse {
        ok: false,
        session_id: None,
        message,
        frame: None,
    }
}

fn with_registry<T>(f: impl FnOnce(&mut SessionRegistry) -> T) -> Result<T, String> {
    let registry = SESSIONS.get_or_init(|| Mutex::new(SessionRegistry::default()));
    let mut guard = registry
        .lock()
        .map_err(|_| "session registry is poisoned".to_string())?;
    Ok(f(&mut guard))
}

fn with_session(
    session_id: u64,
    operation: &str,
    f: impl FnOnce(&mut TimelineService) -> TimelineActionResponse,
) -> TimelineActionResponse {
    match with_registry(|registry| registry.sessions.get_mut(&session_id).map(f)) {
        Ok(Some(response)) => response,
        Ok(None) => TimelineActionResponse::failure(format!(
            "{operation} failed: unknown session {session_id}"
        )),
        Err(err) => TimelineActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn navigate(
    session_id: u64,
    operation: &str,
    f: impl FnOnce(&mut TimelineService) -> Option<SelectionChange>,
) -> TimelineActionResponse {
    with_session(session_id, operation, |service| {
        let changed = f(service).is_some();
        TimelineActionResponse::applied(changed, service.selection())
    })
}

fn to_frame(view: &TimelineView) -> TimelineFrame {
    TimelineFrame {
        title: view.title.clone(),
        points: view
            .points
            .iter()
            .map(|point| FramePoint {
                id: point.id,
                label: point.label.clone(),
                translate_x: point.translate_x,
                translate_y: point.translate_y,
                size: point.visual.size,
                offset: point.visual.offset,
                button_opacity: point.visual.button_opacity,
                button_scale: point.visual.button_scale,
                active: point.active,
            })
            .collect(),
        year_from: view.year_from,
        year_to: view.year_to,
        pagination_label: view.pagination_label.clone(),
        prev_enabled: view.prev_enabled,
        next_enabled: view.next_enabled,
        dot_ids: view.dots.iter().map(|dot| dot.id).collect(),
        active_dot: view
            .dots
            .iter()
            .find(|dot| dot.active)
            .map(|dot| dot.id)
            .unwrap_or(0),
        articles_opacity: view.articles_opacity,
        articles: view
            .carousel
            .articles
            .iter()
            .map(|article| FrameArticle {
                year: article.year.clone(),
                text: article.text.clone(),
            })
            .collect(),
        slides_per_view: view.carousel.slides_per_view,
        slide_spacing: view.carousel.space_between,
        slide_index: u32::try_from(view.carousel.index).unwrap_or(u32::MAX),
        show_slide_prev: view.carousel.show_prev,
        show_slide_next: view.carousel.show_next,
        animating: view.animating,
    }
}
