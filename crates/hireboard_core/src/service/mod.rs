//! View use-case services.
//!
//! # Responsibility
//! - Turn raw select-box and search-box input into typed pipeline queries.
//! - Keep FFI and CLI layers decoupled from record storage and query stages.

pub mod applicant_service;
pub mod billing_service;
pub mod dashboard_service;
pub mod draft_service;
pub mod listing_service;
