//! Timeline use-case services.
//!
//! # Responsibility
//! - Couple the pure selection reducer with geometry plans and animators.
//! - Produce render snapshots for UI/FFI layers.

pub mod timeline_service;
pub mod view;
