use hireboard_core::{Catalog, DashboardService, InMemoryCatalog, SeedCatalog};

#[test]
fn stats_match_sample_snapshot() {
    let stats = DashboardService::new(SeedCatalog).stats();

    assert_eq!(stats.total_jobs, 8);
    assert_eq!(stats.total_applicants, 304);
    assert_eq!(stats.active_listings, 6);
    assert_eq!(stats.avg_applicants, 38);
    assert_eq!(stats.new_this_week, 89);
}

#[test]
fn recent_jobs_follow_snapshot_order() {
    let recent = DashboardService::new(SeedCatalog).recent_jobs(4);
    let ids = recent.iter().map(|job| job.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn top_performing_ranks_by_applicants() {
    let top = DashboardService::new(SeedCatalog).top_performing(4);

    let ranked = top
        .iter()
        .map(|entry| (entry.rank, entry.job.applicants))
        .collect::<Vec<_>>();
    assert_eq!(ranked, vec![(1, 67), (2, 56), (3, 42), (4, 38)]);
    assert_eq!(top[0].job.title, "HR Specialist");
}

#[test]
fn top_performing_keeps_ties_in_snapshot_order() {
    let mut jobs = SeedCatalog.jobs().to_vec();
    for job in &mut jobs {
        job.applicants = 10;
    }
    jobs[5].applicants = 11;
    let catalog = InMemoryCatalog::try_new(jobs).unwrap();

    let top = DashboardService::new(&catalog).top_performing(4);
    let ids = top.iter().map(|entry| entry.job.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![6, 1, 2, 3]);
}

#[test]
fn overview_uses_configured_highlight_count() {
    let overview = DashboardService::with_highlight_count(SeedCatalog, 2).overview();

    assert_eq!(overview.recent.len(), 2);
    assert_eq!(overview.top_performing.len(), 2);
    assert_eq!(overview.stats.total_jobs, 8);
}

#[test]
fn empty_catalog_has_zero_average() {
    let catalog = InMemoryCatalog::try_new(Vec::new()).unwrap();
    let stats = DashboardService::new(&catalog).stats();
    assert_eq!(stats.total_jobs, 0);
    assert_eq!(stats.avg_applicants, 0);
    assert!(DashboardService::new(&catalog).top_performing(4).is_empty());
}
