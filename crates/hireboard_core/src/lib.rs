//! Core domain logic for HireBoard.
//! This crate owns the recruiting records and the list-view query pipeline
//! every page is rendered from.

pub mod logging;
pub mod model;
pub mod notify;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;
pub mod settings;

pub use logging::{
    default_log_level, init_logging, init_logging_from_settings, logging_status, LoggingError,
};
pub use model::applicant::{Applicant, ApplicantField, ApplicantId, ApplicantStatus};
pub use model::invoice::{
    BillingInterval, Invoice, InvoiceField, InvoiceStatus, PaymentMethod, Plan,
};
pub use model::job::{Job, JobField, JobId, JobStatus, JobType, JobValidationError};
pub use notify::{LogNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use query::{
    enum_filter, filter_records, paginate, run_query, sort_by_key, sort_records, top_n,
    FieldFilter, ListQuery, Page, QueryError, QueryResult, Queryable, SortDirection, SortSpec,
    SortValue,
};
pub use repo::catalog_repo::{Catalog, CatalogError, InMemoryCatalog, SeedCatalog};
pub use service::applicant_service::{ApplicantService, ApplicantsRequest};
pub use service::billing_service::{BillingService, InvoicesRequest, ListingCapacity};
pub use service::dashboard_service::{
    DashboardOverview, DashboardService, DashboardStats, RankedJob,
};
pub use service::draft_service::{
    submit_draft, DraftError, Education, ExperienceLevel, JobDraft, SalaryPeriod,
    SubmissionReceipt, SubmitMode,
};
pub use service::listing_service::{ListingService, ListingsRequest};
pub use settings::Settings;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
