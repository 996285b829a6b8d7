//! Applicants table use-case service.
//!
//! # Invariants
//! - Search covers candidate name and applied-for role.
//! - Rows keep snapshot order (newest application first).

use crate::model::applicant::{Applicant, ApplicantField, ApplicantStatus};
use crate::model::job::JobId;
use crate::query::{
    enum_filter, filter_records, run_query, FieldFilter, ListQuery, Page, QueryResult,
};
use crate::repo::catalog_repo::Catalog;
use crate::settings::APPLICANTS_PAGE_SIZE;
use std::collections::BTreeMap;

/// Raw applicants table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantsRequest {
    pub search: String,
    /// `all` or a status label (`interview`).
    pub status: String,
    pub page: u32,
}

impl Default for ApplicantsRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            page: 1,
        }
    }
}

pub struct ApplicantService<C: Catalog> {
    catalog: C,
    page_size: u32,
}

impl<C: Catalog> ApplicantService<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_page_size(catalog, APPLICANTS_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: C, page_size: u32) -> Self {
        Self { catalog, page_size }
    }

    /// Returns one applicants table page.
    ///
    /// # Errors
    /// - `QueryError::UnknownFilterValue` for an unknown status value.
    /// - `QueryError::InvalidArgument` for a zero page number or size.
    pub fn list(&self, request: &ApplicantsRequest) -> QueryResult<Page<Applicant>> {
        let status = enum_filter("status", &request.status, |value| {
            ApplicantStatus::parse(value).is_some()
        })?;

        let query = ListQuery::new(self.page_size)
            .with_search(request.search.as_str())
            .with_filter(ApplicantField::Status, status)
            .with_page(request.page);
        run_query(self.catalog.applicants(), &query)
    }

    /// Applications whose role equals the title of job `job_id`.
    ///
    /// Returns an empty list for an unknown job.
    pub fn for_job(&self, job_id: JobId) -> Vec<Applicant> {
        let Some(job) = self.catalog.job(job_id) else {
            return Vec::new();
        };
        let filters = BTreeMap::from([(
            ApplicantField::Role,
            FieldFilter::equals(job.title.as_str()),
        )]);
        filter_records(self.catalog.applicants(), "", &filters)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Count of applications per pipeline stage, in stage order.
    pub fn status_counts(&self) -> Vec<(ApplicantStatus, usize)> {
        ApplicantStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self
                    .catalog
                    .applicants()
                    .iter()
                    .filter(|applicant| applicant.status == status)
                    .count();
                (status, count)
            })
            .collect()
    }
}
