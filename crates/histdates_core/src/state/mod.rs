//! Pure view state.
//!
//! # Responsibility
//! - Compute next selection from user actions without touching animation.
//! - Track carousel position and edge flags.
//!
//! # Invariants
//! - Selection is always a valid page id in `1..=page_count`.
//! - Reducers never mutate; they return the next state or `None`.

pub mod carousel;
pub mod selection;
