//! Frame-driven interpolation layer.
//!
//! # Responsibility
//! - Interpolate view values toward targets computed by the pure state and
//!   geometry layers.
//! - Advance only when the host feeds a frame delta; no clocks, no threads.
//!
//! # Invariants
//! - A finished animation reports its exact target value.
//! - Starting a new animation on a property replaces the in-flight one,
//!   beginning from the currently displayed value.

pub mod counter;
pub mod easing;
pub mod fade;
pub mod hover;
pub mod rotation;
pub mod tween;
