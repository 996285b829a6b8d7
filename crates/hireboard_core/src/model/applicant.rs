//! Applicant domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another applicant.
//! - `role` holds the title of the job applied for.

use crate::model::format::format_date;
use crate::query::{Queryable, SortValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub type ApplicantId = u32;

/// Hiring pipeline stage of one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantStatus {
    New,
    Review,
    Interview,
    Offer,
}

impl ApplicantStatus {
    pub const ALL: [ApplicantStatus; 4] = [
        ApplicantStatus::New,
        ApplicantStatus::Review,
        ApplicantStatus::Interview,
        ApplicantStatus::Offer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Review => "Review",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value))
    }
}

/// One candidate application row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    /// Title of the job applied for.
    pub role: String,
    pub status: ApplicantStatus,
    /// Avatar initials (`SC`).
    pub avatar: String,
    pub applied_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApplicantField {
    Name,
    Role,
    Status,
    AppliedDate,
}

const APPLICANT_SEARCH_FIELDS: [ApplicantField; 2] = [ApplicantField::Name, ApplicantField::Role];

impl Queryable for Applicant {
    type Field = ApplicantField;

    fn search_fields() -> &'static [ApplicantField] {
        &APPLICANT_SEARCH_FIELDS
    }

    fn field_text(&self, field: ApplicantField) -> Cow<'_, str> {
        match field {
            ApplicantField::Name => Cow::Borrowed(self.name.as_str()),
            ApplicantField::Role => Cow::Borrowed(self.role.as_str()),
            ApplicantField::Status => Cow::Borrowed(self.status.label()),
            ApplicantField::AppliedDate => Cow::Owned(format_date(self.applied_date)),
        }
    }

    fn sort_value(&self, field: ApplicantField) -> SortValue {
        match field {
            ApplicantField::AppliedDate => SortValue::Date(self.applied_date),
            other => SortValue::Text(self.field_text(other).to_lowercase()),
        }
    }
}
