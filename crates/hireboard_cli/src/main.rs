//! Command-line entry point for HireBoard views.
//!
//! # Responsibility
//! - Render the listings, dashboard, applicants and billing views as text or JSON.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use hireboard_core::model::format::{format_date, format_salary_range};
use hireboard_core::{
    init_logging_from_settings, ApplicantService, ApplicantsRequest, BillingService,
    DashboardService, InvoicesRequest, ListingService, ListingsRequest, LogNotifier,
    SeedCatalog, Settings,
};
use log::warn;
use serde::Serialize;
use std::error::Error;
use std::process::ExitCode;

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "hireboard", about = "recruiting dashboard views over the sample catalog")]
struct Cmd {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Print core linkage info.
    Ping,
    /// One page of job listings.
    Listings {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long = "type", default_value = "all")]
        job_type: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Summary stats with recent and top performing jobs.
    Dashboard,
    /// One page of applicants.
    Applicants {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Plan, card on file and invoice history.
    Billing {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Resolve the view action for one job.
    View { id: u32 },
}

fn main() -> ExitCode {
    let args = Cmd::parse();
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("ignoring HIREBOARD_* settings: {err}");
        Settings::default()
    });
    if let Err(err) = init_logging_from_settings(&settings) {
        eprintln!("logging disabled: {err}");
    }

    match run(args, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=cli_command module=cli status=error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cmd, settings: &Settings) -> CliResult {
    let json = args.json;
    match args.command {
        Some(SubCommandType::Ping) | None => {
            println!("hireboard_core ping={}", hireboard_core::ping());
            println!("hireboard_core version={}", hireboard_core::core_version());
        }
        Some(SubCommandType::Listings {
            search,
            status,
            job_type,
            page,
        }) => {
            let service = ListingService::with_page_size(SeedCatalog, settings.listings_page_size);
            let page = service.list(&ListingsRequest {
                search,
                status,
                job_type,
                page,
            })?;
            if json {
                return print_json(&page);
            }
            for job in &page.items {
                println!(
                    "#{:<3} {:<28} {:<16} {:<10} {:<7} {:<15} {} applicants",
                    job.id,
                    job.title,
                    job.department,
                    job.job_type.label(),
                    job.status.label(),
                    format_salary_range(job.salary_min, job.salary_max),
                    job.applicants
                );
            }
            println!(
                "showing {}-{} of {} (page {}/{})",
                page.range_start(),
                page.range_end(),
                page.total_count,
                page.page_number,
                page.total_pages
            );
        }
        Some(SubCommandType::Dashboard) => {
            let overview = DashboardService::with_highlight_count(
                SeedCatalog,
                settings.dashboard_highlight_count,
            )
            .overview();
            if json {
                return print_json(&overview);
            }
            let stats = overview.stats;
            println!("total jobs:       {}", stats.total_jobs);
            println!("total applicants: {}", stats.total_applicants);
            println!("active listings:  {}", stats.active_listings);
            println!("avg applicants:   {}", stats.avg_applicants);
            println!("new this week:    {}", stats.new_this_week);
            println!("recent:");
            for job in &overview.recent {
                println!("  {} ({})", job.title, format_date(job.posted_date));
            }
            println!("top performing:");
            for entry in &overview.top_performing {
                println!(
                    "  {}. {} - {} applicants",
                    entry.rank, entry.job.title, entry.job.applicants
                );
            }
        }
        Some(SubCommandType::Applicants {
            search,
            status,
            page,
        }) => {
            let service =
                ApplicantService::with_page_size(SeedCatalog, settings.applicants_page_size);
            let page = service.list(&ApplicantsRequest {
                search,
                status,
                page,
            })?;
            if json {
                return print_json(&page);
            }
            for applicant in &page.items {
                println!(
                    "{:<3} {:<16} {:<28} {:<10} {}",
                    applicant.avatar,
                    applicant.name,
                    applicant.role,
                    applicant.status.label(),
                    format_date(applicant.applied_date)
                );
            }
            println!("{} applicants", page.total_count);
        }
        Some(SubCommandType::Billing {
            search,
            status,
            page,
        }) => {
            let service = BillingService::with_page_size(SeedCatalog, settings.invoices_page_size);
            let page = service.invoices(&InvoicesRequest {
                search,
                status,
                page,
            })?;
            if json {
                return print_json(&page);
            }
            let plan = service.plan();
            let capacity = service.listing_capacity();
            println!("{} - {}", plan.name, plan.summary());
            println!("active listings: {}/{}", capacity.active, capacity.limit);
            println!("card: {}", service.payment_method().masked_number());
            for invoice in &page.items {
                println!(
                    "{} {:<13} {:>9} {}",
                    invoice.id,
                    format_date(invoice.date),
                    invoice.display_amount(),
                    invoice.status.label()
                );
            }
        }
        Some(SubCommandType::View { id }) => {
            let service = ListingService::new(SeedCatalog);
            let job = service
                .view_job(id, &LogNotifier)
                .ok_or_else(|| format!("job #{id} not found"))?;
            if json {
                return print_json(job);
            }
            println!("Viewing job #{}: {}", job.id, job.title);
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
