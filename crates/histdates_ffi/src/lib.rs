//! Flutter-facing bindings for the timeline core.

pub mod api;
