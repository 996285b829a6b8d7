//! Job listings use-case service.
//!
//! # Responsibility
//! - Build listings queries from search text and status/type select values.
//! - Resolve view and edit actions on a listed job.
//!
//! # Invariants
//! - Search covers title, department and location only.
//! - Status and type filters accept `all` or a known label, nothing else.
//! - Listings keep snapshot order; no implicit sort.

use crate::model::job::{Job, JobField, JobId, JobStatus, JobType};
use crate::notify::{Notice, Notifier};
use crate::query::{enum_filter, run_query, ListQuery, Page, QueryResult};
use crate::repo::catalog_repo::Catalog;
use crate::service::draft_service::JobDraft;
use crate::settings::LISTINGS_PAGE_SIZE;
use log::info;

/// Raw listings view state as held by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsRequest {
    pub search: String,
    /// `all` or a status label (`active`).
    pub status: String,
    /// `all` or a type label (`full-time`).
    pub job_type: String,
    /// 1-based page number.
    pub page: u32,
}

impl Default for ListingsRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            job_type: "all".to_string(),
            page: 1,
        }
    }
}

/// Use-case service for the listings page.
pub struct ListingService<C: Catalog> {
    catalog: C,
    page_size: u32,
}

impl<C: Catalog> ListingService<C> {
    /// Creates a service with the default listings page size.
    pub fn new(catalog: C) -> Self {
        Self::with_page_size(catalog, LISTINGS_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: C, page_size: u32) -> Self {
        Self { catalog, page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns one listings page for `request`.
    ///
    /// # Errors
    /// - `QueryError::UnknownFilterValue` for unknown status/type values.
    /// - `QueryError::InvalidArgument` for a zero page number or size.
    pub fn list(&self, request: &ListingsRequest) -> QueryResult<Page<Job>> {
        let query = build_listings_query(request, self.page_size)?;
        let page = run_query(self.catalog.jobs(), &query)?;
        info!(
            "event=listings_query module=listing status=ok search_len={} total={} page={}/{}",
            request.search.chars().count(),
            page.total_count,
            page.page_number,
            page.total_pages
        );
        Ok(page)
    }

    /// Looks up a job for the view action and emits a `Viewing job #<id>`
    /// notice when it exists.
    pub fn view_job(&self, id: JobId, notifier: &dyn Notifier) -> Option<&Job> {
        let job = self.catalog.job(id);
        match job {
            Some(found) => notifier.notify(Notice::info(format!("Viewing job #{}", found.id))),
            None => notifier.notify(Notice::error(format!("Job #{id} not found"))),
        }
        job
    }

    /// Returns a draft prefilled from job `id` for the edit form.
    pub fn edit_draft(&self, id: JobId) -> Option<JobDraft> {
        self.catalog.job(id).map(JobDraft::from_job)
    }
}

/// Translates raw listings input into a typed pipeline query.
///
/// # Errors
/// - Returns `QueryError::UnknownFilterValue` when `status` or `job_type`
///   is neither `all` nor a known label.
pub fn build_listings_query(
    request: &ListingsRequest,
    page_size: u32,
) -> QueryResult<ListQuery<JobField>> {
    let status = enum_filter("status", &request.status, |value| {
        JobStatus::parse(value).is_some()
    })?;
    let job_type = enum_filter("type", &request.job_type, |value| {
        JobType::parse(value).is_some()
    })?;

    Ok(ListQuery::new(page_size)
        .with_search(request.search.as_str())
        .with_filter(JobField::Status, status)
        .with_filter(JobField::JobType, job_type)
        .with_page(request.page))
}

#[cfg(test)]
mod tests {
    use super::{build_listings_query, ListingsRequest};
    use crate::model::job::JobField;
    use crate::query::{FieldFilter, QueryError};

    #[test]
    fn default_request_has_no_constraints() {
        let query = build_listings_query(&ListingsRequest::default(), 3).expect("valid query");
        assert_eq!(query.filters.get(&JobField::Status), Some(&FieldFilter::All));
        assert_eq!(query.filters.get(&JobField::JobType), Some(&FieldFilter::All));
        assert_eq!(query.page_number, 1);
        assert!(query.sort.is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let request = ListingsRequest {
            job_type: "internship".to_string(),
            ..ListingsRequest::default()
        };
        let err = build_listings_query(&request, 3).expect_err("unknown type must fail");
        assert_eq!(
            err,
            QueryError::UnknownFilterValue {
                field: "type",
                value: "internship".to_string(),
            }
        );
    }
}
