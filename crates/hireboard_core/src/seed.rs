//! Fixed mock snapshot backing every view.
//!
//! # Invariants
//! - The snapshot is built once per process and never mutated.
//! - Every seed job satisfies `Job::validate`.

use crate::model::applicant::{Applicant, ApplicantStatus};
use crate::model::format::derive_initials;
use crate::model::invoice::{BillingInterval, Invoice, InvoiceStatus, PaymentMethod, Plan};
use crate::model::job::{Job, JobId, JobStatus, JobType};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

const JOB_ROWS: [JobRow; 8] = [
    JobRow {
        id: 1,
        title: "Senior Frontend Developer",
        department: "Engineering",
        location: "San Francisco, CA",
        job_type: JobType::FullTime,
        remote: true,
        status: JobStatus::Active,
        salary: (90_000, 130_000),
        posted: (2023, 5, 15),
        applicants: (42, 24),
        initials: "FD",
    },
    JobRow {
        id: 2,
        title: "Product Designer",
        department: "Design",
        location: "New York, NY",
        job_type: JobType::FullTime,
        remote: true,
        status: JobStatus::Active,
        salary: (85_000, 120_000),
        posted: (2023, 5, 18),
        applicants: (38, 15),
        initials: "PD",
    },
    JobRow {
        id: 3,
        title: "Backend Engineer",
        department: "Engineering",
        location: "Austin, TX",
        job_type: JobType::FullTime,
        remote: false,
        status: JobStatus::Active,
        salary: (95_000, 140_000),
        posted: (2023, 5, 20),
        applicants: (29, 12),
        initials: "BE",
    },
    JobRow {
        id: 4,
        title: "Marketing Manager",
        department: "Marketing",
        location: "Remote",
        job_type: JobType::FullTime,
        remote: true,
        status: JobStatus::Paused,
        salary: (75_000, 100_000),
        posted: (2023, 5, 10),
        applicants: (56, 0),
        initials: "MM",
    },
    JobRow {
        id: 5,
        title: "DevOps Engineer",
        department: "Engineering",
        location: "Seattle, WA",
        job_type: JobType::Contract,
        remote: true,
        status: JobStatus::Active,
        salary: (110_000, 150_000),
        posted: (2023, 5, 22),
        applicants: (18, 8),
        initials: "DO",
    },
    JobRow {
        id: 6,
        title: "HR Specialist",
        department: "Human Resources",
        location: "Chicago, IL",
        job_type: JobType::PartTime,
        remote: false,
        status: JobStatus::Closed,
        salary: (45_000, 60_000),
        posted: (2023, 4, 28),
        applicants: (67, 0),
        initials: "HR",
    },
    JobRow {
        id: 7,
        title: "Data Analyst",
        department: "Analytics",
        location: "Boston, MA",
        job_type: JobType::FullTime,
        remote: true,
        status: JobStatus::Active,
        salary: (70_000, 95_000),
        posted: (2023, 5, 25),
        applicants: (33, 19),
        initials: "DA",
    },
    JobRow {
        id: 8,
        title: "UX Researcher",
        department: "Design",
        location: "Los Angeles, CA",
        job_type: JobType::FullTime,
        remote: true,
        status: JobStatus::Active,
        salary: (80_000, 110_000),
        posted: (2023, 5, 27),
        applicants: (21, 11),
        initials: "UX",
    },
];

static SAMPLE_JOBS: Lazy<Vec<Job>> =
    Lazy::new(|| JOB_ROWS.iter().map(JobRow::to_job).collect());

static SAMPLE_APPLICANTS: Lazy<Vec<Applicant>> = Lazy::new(|| {
    vec![
        applicant(1, "Sarah Chen", "Senior Frontend Developer", ApplicantStatus::Interview, 12),
        applicant(2, "Michael Brown", "Product Designer", ApplicantStatus::Review, 11),
        applicant(3, "Emily Davis", "Backend Engineer", ApplicantStatus::New, 10),
        applicant(4, "James Wilson", "DevOps Engineer", ApplicantStatus::Interview, 9),
        applicant(5, "Lisa Anderson", "Data Analyst", ApplicantStatus::Offer, 8),
    ]
});

static SAMPLE_INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    vec![
        invoice("INV-001", date(2024, 12, 1), 29_900),
        invoice("INV-002", date(2024, 11, 1), 29_900),
        invoice("INV-003", date(2024, 10, 1), 29_900),
        invoice("INV-004", date(2024, 9, 1), 19_900),
    ]
});

/// The eight sample job postings, in listing order.
pub fn sample_jobs() -> &'static [Job] {
    SAMPLE_JOBS.as_slice()
}

/// The five sample applications, newest first.
pub fn sample_applicants() -> &'static [Applicant] {
    SAMPLE_APPLICANTS.as_slice()
}

/// Billing history, newest first.
pub fn sample_invoices() -> &'static [Invoice] {
    SAMPLE_INVOICES.as_slice()
}

pub fn current_plan() -> Plan {
    Plan {
        name: "Professional Plan".to_string(),
        max_active_listings: 25,
        price_cents: 29_900,
        interval: BillingInterval::Month,
    }
}

pub fn payment_method() -> PaymentMethod {
    PaymentMethod {
        last4: "4242".to_string(),
        exp_month: 12,
        exp_year: 26,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn applicant(
    id: u32,
    name: &str,
    role: &str,
    status: ApplicantStatus,
    december_day: u32,
) -> Applicant {
    Applicant {
        id,
        avatar: derive_initials(name),
        name: name.to_string(),
        role: role.to_string(),
        status,
        applied_date: date(2024, 12, december_day),
    }
}

fn invoice(id: &str, date: NaiveDate, amount_cents: u64) -> Invoice {
    Invoice {
        id: id.to_string(),
        date,
        amount_cents,
        status: InvoiceStatus::Paid,
    }
}

/// One row of the seed job table.
struct JobRow {
    id: JobId,
    title: &'static str,
    department: &'static str,
    location: &'static str,
    job_type: JobType,
    remote: bool,
    status: JobStatus,
    salary: (u32, u32),
    posted: (i32, u32, u32),
    /// Total and new-this-week applicant counts.
    applicants: (u32, u32),
    initials: &'static str,
}

impl JobRow {
    fn to_job(&self) -> Job {
        let (year, month, day) = self.posted;
        Job {
            id: self.id,
            title: self.title.to_string(),
            department: self.department.to_string(),
            location: self.location.to_string(),
            job_type: self.job_type,
            remote: self.remote,
            status: self.status,
            salary_min: self.salary.0,
            salary_max: self.salary.1,
            posted_date: date(year, month, day),
            applicants: self.applicants.0,
            new_this_week: self.applicants.1,
            initials: self.initials.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sample_applicants, sample_jobs};
    use std::collections::HashSet;

    #[test]
    fn seed_jobs_satisfy_invariants_and_have_unique_ids() {
        let jobs = sample_jobs();
        assert_eq!(jobs.len(), 8);
        for job in jobs {
            job.validate().expect("seed job should be valid");
        }
        let ids = jobs.iter().map(|job| job.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn applicant_avatars_are_derived_from_names() {
        assert_eq!(sample_applicants()[0].avatar, "SC");
    }
}
