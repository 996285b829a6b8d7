//! Job posting domain model.
//!
//! # Responsibility
//! - Define the canonical job record rendered by listings cards and the
//!   dashboard.
//! - Expose typed field access for the list query pipeline.
//!
//! # Invariants
//! - `id` is stable and never reused for another job.
//! - `salary_min <= salary_max`.
//! - `title` is never blank.

use crate::model::format::{derive_initials, format_date};
use crate::query::{Queryable, SortValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a job posting.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type JobId = u32;

/// Employment type shown as a badge on job cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    /// Display label, also the text used by equality filters.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }

    /// Parses a label or select-box value (`full-time`), ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value))
    }
}

/// Publication state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepting applications.
    Active,
    /// Temporarily hidden from candidates.
    Paused,
    /// No longer accepting applications.
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Active, JobStatus::Paused, JobStatus::Closed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Closed => "Closed",
        }
    }

    /// Parses a label or select-box value (`active`), ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value))
    }
}

/// Validation failures for [`Job`] invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobValidationError {
    EmptyTitle,
    InvalidSalaryRange { min: u32, max: u32 },
}

impl Display for JobValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "job title cannot be blank"),
            Self::InvalidSalaryRange { min, max } => {
                write!(f, "salary_max ({max}) must be >= salary_min ({min})")
            }
        }
    }
}

impl Error for JobValidationError {}

/// Canonical job posting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJob")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub remote: bool,
    pub status: JobStatus,
    /// Yearly salary lower bound in whole currency units.
    pub salary_min: u32,
    /// Yearly salary upper bound. Must be >= `salary_min`.
    pub salary_max: u32,
    pub posted_date: NaiveDate,
    /// Total applications received.
    pub applicants: u32,
    /// Applications received during the current week.
    pub new_this_week: u32,
    /// Short badge text rendered on cards (`FD`).
    pub initials: String,
}

impl Job {
    /// Creates an active full-time job with zeroed salary and counters.
    ///
    /// `initials` are derived from the title; seed data may override them.
    ///
    /// # Errors
    /// - Returns [`JobValidationError::EmptyTitle`] for blank titles.
    pub fn new(
        id: JobId,
        title: impl Into<String>,
        department: impl Into<String>,
        location: impl Into<String>,
        posted_date: NaiveDate,
    ) -> Result<Self, JobValidationError> {
        let title = title.into();
        let job = Self {
            id,
            initials: derive_initials(&title),
            title,
            department: department.into(),
            location: location.into(),
            job_type: JobType::FullTime,
            remote: false,
            status: JobStatus::Active,
            salary_min: 0,
            salary_max: 0,
            posted_date,
            applicants: 0,
            new_this_week: 0,
        };
        job.validate()?;
        Ok(job)
    }

    /// Sets the salary range, rejecting reversed bounds.
    pub fn with_salary(mut self, min: u32, max: u32) -> Result<Self, JobValidationError> {
        self.salary_min = min;
        self.salary_max = max;
        self.validate()?;
        Ok(self)
    }

    pub fn with_type(mut self, job_type: JobType) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_applicants(mut self, total: u32, new_this_week: u32) -> Self {
        self.applicants = total;
        self.new_this_week = new_this_week;
        self
    }

    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.title.trim().is_empty() {
            return Err(JobValidationError::EmptyTitle);
        }
        if self.salary_min > self.salary_max {
            return Err(JobValidationError::InvalidSalaryRange {
                min: self.salary_min,
                max: self.salary_max,
            });
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Queryable fields of a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Title,
    Department,
    Location,
    JobType,
    Status,
    Remote,
    SalaryMin,
    SalaryMax,
    PostedDate,
    Applicants,
    NewThisWeek,
}

const JOB_SEARCH_FIELDS: [JobField; 3] =
    [JobField::Title, JobField::Department, JobField::Location];

impl Queryable for Job {
    type Field = JobField;

    fn search_fields() -> &'static [JobField] {
        &JOB_SEARCH_FIELDS
    }

    fn field_text(&self, field: JobField) -> Cow<'_, str> {
        match field {
            JobField::Title => Cow::Borrowed(self.title.as_str()),
            JobField::Department => Cow::Borrowed(self.department.as_str()),
            JobField::Location => Cow::Borrowed(self.location.as_str()),
            JobField::JobType => Cow::Borrowed(self.job_type.label()),
            JobField::Status => Cow::Borrowed(self.status.label()),
            JobField::Remote => Cow::Owned(self.remote.to_string()),
            JobField::SalaryMin => Cow::Owned(self.salary_min.to_string()),
            JobField::SalaryMax => Cow::Owned(self.salary_max.to_string()),
            JobField::PostedDate => Cow::Owned(format_date(self.posted_date)),
            JobField::Applicants => Cow::Owned(self.applicants.to_string()),
            JobField::NewThisWeek => Cow::Owned(self.new_this_week.to_string()),
        }
    }

    fn sort_value(&self, field: JobField) -> SortValue {
        match field {
            JobField::SalaryMin => SortValue::Number(i64::from(self.salary_min)),
            JobField::SalaryMax => SortValue::Number(i64::from(self.salary_max)),
            JobField::Applicants => SortValue::Number(i64::from(self.applicants)),
            JobField::NewThisWeek => SortValue::Number(i64::from(self.new_this_week)),
            JobField::PostedDate => SortValue::Date(self.posted_date),
            other => SortValue::Text(self.field_text(other).to_lowercase()),
        }
    }
}

/// Wire shape used to route deserialization through [`Job::validate`].
#[derive(Deserialize)]
struct RawJob {
    id: JobId,
    title: String,
    department: String,
    location: String,
    #[serde(rename = "type")]
    job_type: JobType,
    remote: bool,
    status: JobStatus,
    salary_min: u32,
    salary_max: u32,
    posted_date: NaiveDate,
    applicants: u32,
    new_this_week: u32,
    #[serde(default)]
    initials: Option<String>,
}

impl TryFrom<RawJob> for Job {
    type Error = JobValidationError;

    fn try_from(raw: RawJob) -> Result<Self, Self::Error> {
        let initials = raw
            .initials
            .unwrap_or_else(|| derive_initials(raw.title.as_str()));
        let job = Self {
            id: raw.id,
            title: raw.title,
            department: raw.department,
            location: raw.location,
            job_type: raw.job_type,
            remote: raw.remote,
            status: raw.status,
            salary_min: raw.salary_min,
            salary_max: raw.salary_max,
            posted_date: raw.posted_date,
            applicants: raw.applicants,
            new_this_week: raw.new_this_week,
            initials,
        };
        job.validate()?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::{JobStatus, JobType};

    #[test]
    fn parse_accepts_labels_and_select_values() {
        assert_eq!(JobType::parse("full-time"), Some(JobType::FullTime));
        assert_eq!(JobType::parse("Part-time"), Some(JobType::PartTime));
        assert_eq!(JobType::parse(" CONTRACT "), Some(JobType::Contract));
        assert_eq!(JobType::parse("internship"), None);

        assert_eq!(JobStatus::parse("paused"), Some(JobStatus::Paused));
        assert_eq!(JobStatus::parse("Closed"), Some(JobStatus::Closed));
        assert_eq!(JobStatus::parse("all"), None);
    }
}
