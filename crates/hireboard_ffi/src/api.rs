//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, view-level functions to Dart via FRB.
//! - Flatten core records into display-ready envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through the envelope `message`, never thrown.

use hireboard_core::model::format::{format_amount, format_date, format_salary_range};
use hireboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    submit_draft, Applicant, ApplicantService, ApplicantsRequest, BillingService,
    DashboardService, Invoice, InvoicesRequest, Job, JobDraft, JobType, ListingService,
    ListingsRequest, Page, QueryError, RankedJob, RecordingNotifier, SeedCatalog, Settings,
    SubmitMode,
};
use log::warn;
use std::sync::OnceLock;

static FFI_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Job card fields, preformatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardItem {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    /// `Full-time|Part-time|Contract`.
    pub job_type: String,
    pub remote: bool,
    /// `Active|Paused|Closed`.
    pub status: String,
    /// `$90k - $130k`.
    pub salary_range: String,
    /// `May 15, 2023`.
    pub posted_date: String,
    pub applicants: u32,
    pub new_this_week: u32,
    pub initials: String,
}

/// Pagination metadata shared by every list envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub total_count: u32,
    pub total_pages: u32,
    pub page: u32,
    /// 1-based index of the first visible row, 0 when empty.
    pub range_start: u32,
    pub range_end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsPageResponse {
    pub items: Vec<JobCardItem>,
    pub page_info: PageInfo,
    /// Empty on success; diagnostic text otherwise.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedJobItem {
    pub rank: u32,
    pub job: JobCardItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub total_jobs: u32,
    pub total_applicants: u64,
    pub active_listings: u32,
    pub avg_applicants: u64,
    pub new_this_week: u64,
    pub recent: Vec<JobCardItem>,
    pub top_performing: Vec<RankedJobItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRowItem {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub status: String,
    pub avatar: String,
    pub applied_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantsResponse {
    pub items: Vec<ApplicantRowItem>,
    pub page_info: PageInfo,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRowItem {
    pub id: String,
    pub date: String,
    /// `$299.00`.
    pub amount: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingResponse {
    pub items: Vec<InvoiceRowItem>,
    pub page_info: PageInfo,
    pub plan_name: String,
    pub plan_summary: String,
    /// `$299.00 per month`.
    pub plan_price: String,
    pub card_number: String,
    pub card_expiry: String,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created draft id, when the action produced one.
    pub id: Option<String>,
    /// Toast text for the UI.
    pub message: String,
}

/// Queries one listings page.
///
/// Input semantics:
/// - `status`, `job_type`: `all` or a label, case-insensitive.
/// - `page`: 1-based; zero or negative values are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn listings_query(
    search: String,
    status: String,
    job_type: String,
    page: i64,
) -> ListingsPageResponse {
    let result = to_page_number(page).and_then(|page| {
        ListingService::with_page_size(SeedCatalog, settings().listings_page_size).list(
            &ListingsRequest {
                search,
                status,
                job_type,
                page,
            },
        )
    });

    match result {
        Ok(page) => ListingsPageResponse {
            page_info: to_page_info(&page),
            items: page.items.iter().map(to_job_card).collect(),
            message: String::new(),
        },
        Err(err) => ListingsPageResponse {
            items: Vec::new(),
            page_info: PageInfo::default(),
            message: format!("listings_query failed: {err}"),
        },
    }
}

/// Resolves the view action on a job card into toast text.
#[flutter_rust_bridge::frb(sync)]
pub fn job_view(id: u32) -> ActionResponse {
    let notifier = RecordingNotifier::new();
    let found = ListingService::new(SeedCatalog)
        .view_job(id, &notifier)
        .is_some();
    ActionResponse {
        ok: found,
        id: found.then(|| id.to_string()),
        message: joined_messages(&notifier),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_overview() -> DashboardResponse {
    let overview =
        DashboardService::with_highlight_count(SeedCatalog, settings().dashboard_highlight_count)
            .overview();
    DashboardResponse {
        total_jobs: saturating_u32(overview.stats.total_jobs),
        total_applicants: overview.stats.total_applicants,
        active_listings: saturating_u32(overview.stats.active_listings),
        avg_applicants: overview.stats.avg_applicants,
        new_this_week: overview.stats.new_this_week,
        recent: overview.recent.iter().map(to_job_card).collect(),
        top_performing: overview.top_performing.iter().map(to_ranked_item).collect(),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn applicants_query(search: String, status: String, page: i64) -> ApplicantsResponse {
    let result = to_page_number(page).and_then(|page| {
        ApplicantService::with_page_size(SeedCatalog, settings().applicants_page_size).list(
            &ApplicantsRequest {
                search,
                status,
                page,
            },
        )
    });

    match result {
        Ok(page) => ApplicantsResponse {
            page_info: to_page_info(&page),
            items: page.items.iter().map(to_applicant_row).collect(),
            message: String::new(),
        },
        Err(err) => ApplicantsResponse {
            items: Vec::new(),
            page_info: PageInfo::default(),
            message: format!("applicants_query failed: {err}"),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn billing_query(search: String, status: String, page: i64) -> BillingResponse {
    let service = BillingService::with_page_size(SeedCatalog, settings().invoices_page_size);
    let plan = service.plan();
    let card = service.payment_method();
    let result = to_page_number(page).and_then(|page| {
        service.invoices(&InvoicesRequest {
            search,
            status,
            page,
        })
    });

    let (items, page_info, message) = match result {
        Ok(page) => (
            page.items.iter().map(to_invoice_row).collect(),
            to_page_info(&page),
            String::new(),
        ),
        Err(err) => (
            Vec::new(),
            PageInfo::default(),
            format!("billing_query failed: {err}"),
        ),
    };

    BillingResponse {
        items,
        page_info,
        plan_summary: plan.summary(),
        plan_price: format!(
            "{} per {}",
            format_amount(plan.price_cents),
            plan.interval.label()
        ),
        plan_name: plan.name,
        card_number: card.masked_number(),
        card_expiry: card.expiry_label(),
        message,
    }
}

/// Validates and acknowledges the job form.
///
/// # FFI contract
/// - `publish = false` saves a draft; `true` publishes.
/// - The listings snapshot is never changed by this call.
#[allow(clippy::too_many_arguments)]
#[flutter_rust_bridge::frb(sync)]
pub fn draft_submit(
    title: String,
    job_type: String,
    location: String,
    remote: bool,
    salary_min: Option<u32>,
    salary_max: Option<u32>,
    skills: Vec<String>,
    publish: bool,
) -> ActionResponse {
    let Some(job_type) = JobType::parse(&job_type) else {
        return ActionResponse {
            ok: false,
            id: None,
            message: format!("draft_submit failed: unknown job type `{job_type}`"),
        };
    };

    let mut draft = draft_with_skills(&skills);
    draft.title = title.trim().to_string();
    draft.job_type = job_type;
    draft.location = location.trim().to_string();
    draft.remote = remote;
    draft.salary_min = salary_min;
    draft.salary_max = salary_max;

    let mode = if publish {
        SubmitMode::Publish
    } else {
        SubmitMode::Draft
    };
    let notifier = RecordingNotifier::new();
    let result = submit_draft(&draft, mode, &notifier);
    ActionResponse {
        ok: result.is_ok(),
        id: result.ok().map(|receipt| receipt.draft_id.to_string()),
        message: joined_messages(&notifier),
    }
}

/// Suggested skills not yet in `selected`.
#[flutter_rust_bridge::frb(sync)]
pub fn draft_suggested_skills(selected: Vec<String>) -> Vec<String> {
    draft_with_skills(&selected)
        .suggested_skills()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Starts from a blank form whose skill list is exactly `skills`.
fn draft_with_skills(skills: &[String]) -> JobDraft {
    let mut draft = JobDraft::default();
    for skill in draft.skills().to_vec() {
        draft.remove_skill(&skill);
    }
    for skill in skills {
        draft.add_skill(skill);
    }
    draft
}

fn settings() -> &'static Settings {
    FFI_SETTINGS.get_or_init(|| {
        Settings::from_env().unwrap_or_else(|err| {
            warn!("event=settings_load module=ffi status=error fallback=defaults error={err}");
            Settings::default()
        })
    })
}

fn to_page_number(page: i64) -> Result<u32, QueryError> {
    match u32::try_from(page) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(QueryError::InvalidArgument {
            name: "page_number",
            value: page,
        }),
    }
}

fn to_page_info<T>(page: &Page<T>) -> PageInfo {
    PageInfo {
        total_count: saturating_u32(page.total_count),
        total_pages: saturating_u32(page.total_pages),
        page: page.page_number,
        range_start: saturating_u32(page.range_start()),
        range_end: saturating_u32(page.range_end()),
    }
}

fn to_job_card(job: &Job) -> JobCardItem {
    JobCardItem {
        id: job.id,
        title: job.title.clone(),
        department: job.department.clone(),
        location: job.location.clone(),
        job_type: job.job_type.label().to_string(),
        remote: job.remote,
        status: job.status.label().to_string(),
        salary_range: format_salary_range(job.salary_min, job.salary_max),
        posted_date: format_date(job.posted_date),
        applicants: job.applicants,
        new_this_week: job.new_this_week,
        initials: job.initials.clone(),
    }
}

fn to_ranked_item(entry: &RankedJob) -> RankedJobItem {
    RankedJobItem {
        rank: saturating_u32(entry.rank),
        job: to_job_card(&entry.job),
    }
}

fn to_applicant_row(applicant: &Applicant) -> ApplicantRowItem {
    ApplicantRowItem {
        id: applicant.id,
        name: applicant.name.clone(),
        role: applicant.role.clone(),
        status: applicant.status.label().to_string(),
        avatar: applicant.avatar.clone(),
        applied_date: format_date(applicant.applied_date),
    }
}

fn to_invoice_row(invoice: &Invoice) -> InvoiceRowItem {
    InvoiceRowItem {
        id: invoice.id.clone(),
        date: format_date(invoice.date),
        amount: invoice.display_amount(),
        status: invoice.status.label().to_string(),
    }
}

fn joined_messages(notifier: &RecordingNotifier) -> String {
    notifier
        .drain()
        .into_iter()
        .map(|notice| notice.message)
        .collect::<Vec<_>>()
        .join("\n")
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        applicants_query, billing_query, core_version, dashboard_overview, draft_submit,
        draft_suggested_skills, init_logging, job_view, listings_query, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/hireboard-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn listings_query_formats_cards() {
        let response = listings_query(String::new(), "active".into(), "all".into(), 1);

        assert!(response.message.is_empty(), "{}", response.message);
        assert_eq!(response.page_info.total_count, 6);
        assert_eq!(response.page_info.range_start, 1);
        assert_eq!(response.page_info.range_end, 3);
        let first = &response.items[0];
        assert_eq!(first.salary_range, "$90k - $130k");
        assert_eq!(first.posted_date, "May 15, 2023");
        assert_eq!(first.job_type, "Full-time");
    }

    #[test]
    fn listings_query_rejects_negative_page() {
        let response = listings_query(String::new(), "all".into(), "all".into(), -1);
        assert!(response.items.is_empty());
        assert!(response.message.contains("page_number"));
    }

    #[test]
    fn job_view_reports_toast_text() {
        let response = job_view(1);
        assert!(response.ok);
        assert_eq!(response.message, "Viewing job #1");
        assert!(!job_view(1000).ok);
    }

    #[test]
    fn dashboard_overview_matches_snapshot() {
        let response = dashboard_overview();
        assert_eq!(response.total_jobs, 8);
        assert_eq!(response.total_applicants, 304);
        assert_eq!(response.top_performing[0].rank, 1);
        assert_eq!(response.top_performing[0].job.title, "HR Specialist");
    }

    #[test]
    fn applicants_and_billing_pages() {
        let applicants = applicants_query("chen".into(), "all".into(), 1);
        assert_eq!(applicants.items.len(), 1);
        assert_eq!(applicants.items[0].applied_date, "Dec 12, 2024");

        let billing = billing_query(String::new(), "paid".into(), 1);
        assert_eq!(billing.items.len(), 4);
        assert_eq!(billing.plan_price, "$299.00 per month");
        assert_eq!(billing.card_expiry, "Expires 12/26");
    }

    #[test]
    fn draft_submit_publishes_and_rejects() {
        let published = draft_submit(
            "Platform Engineer".into(),
            "full-time".into(),
            "Remote".into(),
            true,
            Some(100_000),
            Some(140_000),
            vec!["Rust".into()],
            true,
        );
        assert!(published.ok, "{}", published.message);
        assert!(published.id.is_some());
        assert_eq!(published.message, "Job published successfully!");

        let rejected = draft_submit(
            String::new(),
            "contract".into(),
            String::new(),
            false,
            None,
            None,
            Vec::new(),
            true,
        );
        assert!(!rejected.ok);
        assert!(rejected.message.contains("title"));
    }

    #[test]
    fn suggested_skills_skip_selected() {
        let suggestions = draft_suggested_skills(vec!["Python".into(), "AWS".into()]);
        assert_eq!(
            suggestions,
            vec!["JavaScript", "React", "Node.js", "TypeScript", "SQL"]
        );
    }
}
