//! Catalog contract plus seed-backed and owned implementations.
//!
//! # Invariants
//! - `job(id)` and `jobs()` agree: lookup never finds a job the listing omits.

use crate::model::applicant::Applicant;
use crate::model::invoice::{Invoice, PaymentMethod, Plan};
use crate::model::job::{Job, JobId, JobValidationError};
use crate::seed;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while assembling a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Validation { id: JobId, source: JobValidationError },
    DuplicateJobId(JobId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { id, source } => write!(f, "job {id} is invalid: {source}"),
            Self::DuplicateJobId(id) => write!(f, "duplicate job id: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateJobId(_) => None,
        }
    }
}

/// Read-only record source for every view.
pub trait Catalog {
    fn jobs(&self) -> &[Job];
    fn applicants(&self) -> &[Applicant];
    fn invoices(&self) -> &[Invoice];
    fn plan(&self) -> Plan;
    fn payment_method(&self) -> PaymentMethod;

    fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs().iter().find(|job| job.id == id)
    }
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn jobs(&self) -> &[Job] {
        (**self).jobs()
    }

    fn applicants(&self) -> &[Applicant] {
        (**self).applicants()
    }

    fn invoices(&self) -> &[Invoice] {
        (**self).invoices()
    }

    fn plan(&self) -> Plan {
        (**self).plan()
    }

    fn payment_method(&self) -> PaymentMethod {
        (**self).payment_method()
    }
}

/// Catalog over the process-wide mock snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedCatalog;

impl Catalog for SeedCatalog {
    fn jobs(&self) -> &[Job] {
        seed::sample_jobs()
    }

    fn applicants(&self) -> &[Applicant] {
        seed::sample_applicants()
    }

    fn invoices(&self) -> &[Invoice] {
        seed::sample_invoices()
    }

    fn plan(&self) -> Plan {
        seed::current_plan()
    }

    fn payment_method(&self) -> PaymentMethod {
        seed::payment_method()
    }
}

/// Owned catalog for callers that bring their own records.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    jobs: Vec<Job>,
    applicants: Vec<Applicant>,
    invoices: Vec<Invoice>,
    plan: Plan,
    payment_method: PaymentMethod,
}

impl InMemoryCatalog {
    /// Builds a catalog from `jobs`, with empty applicants/invoices and the
    /// seed plan.
    ///
    /// # Errors
    /// - Returns [`CatalogError::Validation`] when a job breaks its invariants.
    /// - Returns [`CatalogError::DuplicateJobId`] when two jobs share an id.
    pub fn try_new(jobs: Vec<Job>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            job.validate().map_err(|source| CatalogError::Validation {
                id: job.id,
                source,
            })?;
            if !seen.insert(job.id) {
                return Err(CatalogError::DuplicateJobId(job.id));
            }
        }

        Ok(Self {
            jobs,
            applicants: Vec::new(),
            invoices: Vec::new(),
            plan: seed::current_plan(),
            payment_method: seed::payment_method(),
        })
    }

    /// Copies the seed snapshot into an owned catalog.
    pub fn from_seed() -> Self {
        Self {
            jobs: seed::sample_jobs().to_vec(),
            applicants: seed::sample_applicants().to_vec(),
            invoices: seed::sample_invoices().to_vec(),
            plan: seed::current_plan(),
            payment_method: seed::payment_method(),
        }
    }

    pub fn with_applicants(mut self, applicants: Vec<Applicant>) -> Self {
        self.applicants = applicants;
        self
    }

    pub fn with_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }
}

impl Catalog for InMemoryCatalog {
    fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    fn plan(&self) -> Plan {
        self.plan.clone()
    }

    fn payment_method(&self) -> PaymentMethod {
        self.payment_method.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError, InMemoryCatalog, SeedCatalog};

    #[test]
    fn seed_catalog_finds_jobs_by_id() {
        let catalog = SeedCatalog;
        assert_eq!(
            catalog.job(6).map(|job| job.title.as_str()),
            Some("HR Specialist")
        );
        assert!(catalog.job(99).is_none());
    }

    #[test]
    fn try_new_rejects_duplicate_ids() {
        let mut jobs = SeedCatalog.jobs()[..2].to_vec();
        jobs[1].id = jobs[0].id;

        let err = InMemoryCatalog::try_new(jobs).expect_err("duplicates must be rejected");
        assert_eq!(err, CatalogError::DuplicateJobId(1));
    }

    #[test]
    fn try_new_rejects_reversed_salary() {
        let mut jobs = SeedCatalog.jobs()[..1].to_vec();
        jobs[0].salary_min = 200_000;

        let err = InMemoryCatalog::try_new(jobs).expect_err("reversed salary must be rejected");
        assert!(matches!(err, CatalogError::Validation { id: 1, .. }));
    }
}
