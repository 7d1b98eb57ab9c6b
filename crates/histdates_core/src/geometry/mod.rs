//! Circle geometry for the point selector.
//!
//! # Responsibility
//! - Lay out N points evenly on a circle.
//! - Compute the rigid rotation that moves a selected point into the
//!   canonical slot.
//!
//! Everything here is pure; animation consumes the resulting plans.

pub mod layout;
pub mod rotation;
