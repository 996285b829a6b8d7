//! Job creation form state and submission.
//!
//! # Responsibility
//! - Hold the new/edit job form fields, including the skill chip list.
//! - Validate and acknowledge draft and publish submissions.
//!
//! # Invariants
//! - Submission never mutates the job catalog; it only emits a notice and a
//!   receipt.
//! - The skill list holds no duplicates and no blank entries.

use crate::model::format::collapse_whitespace;
use crate::model::job::{Job, JobType, JobValidationError};
use crate::notify::{Notice, Notifier};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Skills preselected on a fresh form.
pub const DEFAULT_SKILLS: [&str; 3] = ["JavaScript", "React", "Node.js"];
/// Quick-add suggestions shown below the skill input.
pub const SUGGESTED_SKILLS: [&str; 7] = [
    "JavaScript",
    "React",
    "Node.js",
    "TypeScript",
    "Python",
    "SQL",
    "AWS",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPeriod {
    #[default]
    Year,
    Month,
    Hour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    Draft,
    Publish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Publishing requires a non-blank title.
    MissingTitle,
    InvalidSalary(JobValidationError),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "job title is required to publish"),
            Self::InvalidSalary(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingTitle => None,
            Self::InvalidSalary(err) => Some(err),
        }
    }
}

/// New/edit job form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDraft")]
pub struct JobDraft {
    pub title: String,
    pub job_type: JobType,
    pub location: String,
    pub remote: bool,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub salary_period: SalaryPeriod,
    /// Whether the salary range is shown on the public post.
    pub show_salary: bool,
    pub description: String,
    skills: Vec<String>,
    pub experience: Option<ExperienceLevel>,
    pub education: Option<Education>,
}

/// Wire shape used to route deserialized skills through [`JobDraft::add_skill`].
#[derive(Deserialize)]
struct RawDraft {
    title: String,
    job_type: JobType,
    location: String,
    remote: bool,
    salary_min: Option<u32>,
    salary_max: Option<u32>,
    salary_period: SalaryPeriod,
    show_salary: bool,
    description: String,
    skills: Vec<String>,
    experience: Option<ExperienceLevel>,
    education: Option<Education>,
}

impl From<RawDraft> for JobDraft {
    fn from(raw: RawDraft) -> Self {
        let mut draft = Self {
            title: raw.title,
            job_type: raw.job_type,
            location: raw.location,
            remote: raw.remote,
            salary_min: raw.salary_min,
            salary_max: raw.salary_max,
            salary_period: raw.salary_period,
            show_salary: raw.show_salary,
            description: raw.description,
            skills: Vec::new(),
            experience: raw.experience,
            education: raw.education,
        };
        for skill in &raw.skills {
            draft.add_skill(skill);
        }
        draft
    }
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            job_type: JobType::FullTime,
            location: String::new(),
            remote: false,
            salary_min: None,
            salary_max: None,
            salary_period: SalaryPeriod::Year,
            show_salary: true,
            description: String::new(),
            skills: DEFAULT_SKILLS.iter().map(|skill| skill.to_string()).collect(),
            experience: None,
            education: None,
        }
    }
}

impl JobDraft {
    /// Prefills the edit form from an existing job.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            job_type: job.job_type,
            location: job.location.clone(),
            remote: job.remote,
            salary_min: Some(job.salary_min),
            salary_max: Some(job.salary_max),
            ..Self::default()
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Adds a skill after collapsing whitespace.
    ///
    /// Returns `false` for blank input or an exact duplicate.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = collapse_whitespace(skill);
        if skill.is_empty() || self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    /// Returns `false` when `skill` was not selected.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|selected| selected != skill);
        self.skills.len() != before
    }

    /// Suggestions not yet selected, in suggestion order.
    pub fn suggested_skills(&self) -> Vec<&'static str> {
        SUGGESTED_SKILLS
            .into_iter()
            .filter(|suggestion| !self.skills.iter().any(|skill| skill == suggestion))
            .collect()
    }

    /// Checks the fields required for `mode`.
    ///
    /// # Errors
    /// - [`DraftError::MissingTitle`] when publishing with a blank title.
    /// - [`DraftError::InvalidSalary`] when both bounds are set and reversed.
    pub fn validate(&self, mode: SubmitMode) -> Result<(), DraftError> {
        if mode == SubmitMode::Publish && self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(DraftError::InvalidSalary(
                    JobValidationError::InvalidSalaryRange { min, max },
                ));
            }
        }
        Ok(())
    }
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub draft_id: Uuid,
    pub mode: SubmitMode,
}

/// Validates and acknowledges a draft or publish action.
///
/// Emits a success notice on acceptance and an error notice on rejection.
pub fn submit_draft(
    draft: &JobDraft,
    mode: SubmitMode,
    notifier: &dyn Notifier,
) -> Result<SubmissionReceipt, DraftError> {
    if let Err(err) = draft.validate(mode) {
        notifier.notify(Notice::error(err.to_string()));
        return Err(err);
    }

    let receipt = SubmissionReceipt {
        draft_id: Uuid::new_v4(),
        mode,
    };
    let message = match mode {
        SubmitMode::Draft => "Job saved as draft",
        SubmitMode::Publish => "Job published successfully!",
    };
    notifier.notify(Notice::success(message));
    info!(
        "event=draft_submit module=draft status=ok mode={:?} skills={}",
        mode,
        draft.skills.len()
    );
    Ok(receipt)
}
