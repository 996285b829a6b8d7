//! Flutter-facing bindings for HireBoard core.

pub mod api;
