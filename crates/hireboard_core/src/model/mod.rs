//! Recruiting domain model.
//!
//! # Responsibility
//! - Define the typed records shown by the listings, dashboard, applicants
//!   and billing views.
//! - Declare which fields of each record are searchable and filterable.
//!
//! # Invariants
//! - Every record is identified by a stable id that is never reused.
//! - Records are immutable snapshots; no view mutates them.

pub mod applicant;
pub mod format;
pub mod invoice;
pub mod job;
