//! Dashboard aggregates.
//!
//! # Responsibility
//! - Compute headline statistics over the job snapshot.
//! - Provide the "recent" and "top performing" highlight panels.
//!
//! # Invariants
//! - Top performing order is applicants descending; ties keep snapshot order.
//! - Statistics over an empty catalog are all zero.

use crate::model::job::Job;
use crate::query::{top_n, SortDirection};
use crate::repo::catalog_repo::Catalog;
use crate::settings::DASHBOARD_HIGHLIGHT_COUNT;
use serde::Serialize;

/// Headline numbers shown in the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub total_applicants: u64,
    pub active_listings: usize,
    /// Mean applicants per job, rounded half up.
    pub avg_applicants: u64,
    pub new_this_week: u64,
}

/// One entry of the top performing panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedJob {
    /// 1-based rank.
    pub rank: usize,
    pub job: Job,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub recent: Vec<Job>,
    pub top_performing: Vec<RankedJob>,
}

pub struct DashboardService<C: Catalog> {
    catalog: C,
    highlight_count: usize,
}

impl<C: Catalog> DashboardService<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_highlight_count(catalog, DASHBOARD_HIGHLIGHT_COUNT)
    }

    pub fn with_highlight_count(catalog: C, highlight_count: u32) -> Self {
        Self {
            catalog,
            highlight_count: highlight_count as usize,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        compute_stats(self.catalog.jobs())
    }

    /// First `n` jobs in snapshot order.
    pub fn recent_jobs(&self, n: usize) -> Vec<Job> {
        self.catalog.jobs().iter().take(n).cloned().collect()
    }

    /// Top `n` jobs by applicant count.
    pub fn top_performing(&self, n: usize) -> Vec<RankedJob> {
        top_n(
            self.catalog.jobs(),
            n,
            |job| job.applicants,
            SortDirection::Descending,
        )
        .into_iter()
        .enumerate()
        .map(|(index, job)| RankedJob {
            rank: index + 1,
            job,
        })
        .collect()
    }

    /// Stats plus both highlight panels at the configured size.
    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview {
            stats: self.stats(),
            recent: self.recent_jobs(self.highlight_count),
            top_performing: self.top_performing(self.highlight_count),
        }
    }
}

pub fn compute_stats(jobs: &[Job]) -> DashboardStats {
    let total_jobs = jobs.len();
    let total_applicants = jobs.iter().map(|job| u64::from(job.applicants)).sum();
    DashboardStats {
        total_jobs,
        total_applicants,
        active_listings: jobs.iter().filter(|job| job.is_active()).count(),
        avg_applicants: rounded_mean(total_applicants, total_jobs as u64),
        new_this_week: jobs.iter().map(|job| u64::from(job.new_this_week)).sum(),
    }
}

fn rounded_mean(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (total * 2 + count) / (count * 2)
}
