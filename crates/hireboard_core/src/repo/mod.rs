//! Read-only data access for view services.
//!
//! # Responsibility
//! - Define the catalog contract the services read records from.
//! - Keep the mock snapshot behind the same seam a real data layer would use.
//!
//! # Invariants
//! - Catalogs expose immutable slices; no service can mutate records.
//! - Record order is the snapshot order and is stable across calls.

pub mod catalog_repo;
