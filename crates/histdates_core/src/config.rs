//! Timeline configuration.
//!
//! # Responsibility
//! - Hold every geometry/animation constant the timeline uses.
//! - Load overrides from a JSON file; unspecified fields keep defaults.
//!
//! # Invariants
//! - A validated config has a positive finite radius and positive finite
//!   slides-per-view values.

use crate::animation::easing::Easing;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "HISTDATES_CONFIG_PATH";
/// Environment variable naming an optional JSON page catalog file.
pub const PAGES_PATH_ENV: &str = "HISTDATES_PAGES_PATH";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config loading and validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Geometry, timing and responsive-layout settings for one timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Header label above the circle.
    pub title: String,
    /// Circle radius in px.
    pub radius: f64,
    /// Angle of point 1 at layout time, in radians.
    pub base_offset_rad: f64,
    /// Vertical-axis angle the selected point is rotated into, in degrees.
    pub canonical_angle_deg: f64,
    pub rotation_duration_ms: u64,
    pub counter_duration_ms: u64,
    pub hover_duration_ms: u64,
    /// Duration of each of the three articles fade steps.
    pub fade_step_ms: u64,
    /// Viewport width at and above which the wide carousel layout applies.
    pub wide_viewport_min_px: u32,
    pub wide_slides_per_view: f64,
    pub narrow_slides_per_view: f64,
    pub slide_spacing_px: f64,
    pub easing: Easing,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            title: "Historical dates".to_string(),
            radius: 150.0,
            base_offset_rad: -4.19,
            canonical_angle_deg: -30.0,
            rotation_duration_ms: 1200,
            counter_duration_ms: 500,
            hover_duration_ms: 300,
            fade_step_ms: 500,
            wide_viewport_min_px: 428,
            wide_slides_per_view: 3.0,
            narrow_slides_per_view: 1.6,
            slide_spacing_px: 50.0,
            easing: Easing::Power1Out,
        }
    }
}

impl TimelineConfig {
    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(
            "event=config_load module=config status=ok path={}",
            path.display()
        );
        Ok(config)
    }

    /// Loads from `HISTDATES_CONFIG_PATH` when set and non-blank, else defaults.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::load(raw.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        require_positive("radius", self.radius)?;
        require_finite("base_offset_rad", self.base_offset_rad)?;
        require_finite("canonical_angle_deg", self.canonical_angle_deg)?;
        require_positive("wide_slides_per_view", self.wide_slides_per_view)?;
        require_positive("narrow_slides_per_view", self.narrow_slides_per_view)?;
        require_finite("slide_spacing_px", self.slide_spacing_px)?;
        Ok(())
    }

    pub fn rotation_duration(&self) -> Duration {
        Duration::from_millis(self.rotation_duration_ms)
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn hover_duration(&self) -> Duration {
        Duration::from_millis(self.hover_duration_ms)
    }

    pub fn fade_step(&self) -> Duration {
        Duration::from_millis(self.fade_step_ms)
    }

    /// Carousel slides per view for a viewport width.
    pub fn slides_per_view(&self, viewport_width: u32) -> f64 {
        if viewport_width >= self.wide_viewport_min_px {
            self.wide_slides_per_view
        } else {
            self.narrow_slides_per_view
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(ConfigError::Invalid {
        field,
        reason: format!("expected a finite number, got {value}"),
    })
}

fn require_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        return Ok(());
    }
    Err(ConfigError::Invalid {
        field,
        reason: format!("expected a positive number, got {value}"),
    })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TimelineConfig};
    use crate::animation::easing::Easing;

    #[test]
    fn defaults_are_valid() {
        let config = TimelineConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.radius, 150.0);
        assert_eq!(config.rotation_duration().as_millis(), 1200);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TimelineConfig::from_json_str(r#"{ "radius": 200, "easing": "linear" }"#)
            .expect("partial config should parse");
        assert_eq!(config.radius, 200.0);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.counter_duration_ms, 500);
        assert_eq!(config.title, "Historical dates");
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = TimelineConfig::from_json_str(r#"{ "radius": 0 }"#)
            .expect_err("zero radius must fail");
        assert!(matches!(err, ConfigError::Invalid { field: "radius", .. }));
    }

    #[test]
    fn slides_per_view_switches_at_breakpoint() {
        let config = TimelineConfig::default();
        assert_eq!(config.slides_per_view(428), 3.0);
        assert_eq!(config.slides_per_view(1440), 3.0);
        assert_eq!(config.slides_per_view(427), 1.6);
    }
}
