//! Timeline domain model.
//!
//! # Responsibility
//! - Define the static reference data (pages, articles) rendered by the timeline.
//! - Define the derived on-circle point shape mutated by rotation.
//!
//! # Invariants
//! - Page ids are contiguous `1..=N` and stable for the session.
//! - Every point id matches exactly one page id.

pub mod page;
pub mod point;
