use chrono::NaiveDate;
use hireboard_core::{
    ApplicantService, ApplicantStatus, ApplicantsRequest, BillingInterval, BillingService,
    Catalog, InMemoryCatalog, Invoice, InvoiceStatus, InvoicesRequest, Plan, QueryError,
    SeedCatalog,
};

#[test]
fn applicants_table_lists_all_five() {
    let page = ApplicantService::new(SeedCatalog)
        .list(&ApplicantsRequest::default())
        .unwrap();

    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].name, "Sarah Chen");
    assert_eq!(page.items[0].avatar, "SC");
}

#[test]
fn applicants_search_and_status_filter() {
    let service = ApplicantService::new(SeedCatalog);

    let interviews = service
        .list(&ApplicantsRequest {
            status: "interview".to_string(),
            ..ApplicantsRequest::default()
        })
        .unwrap();
    let names = interviews
        .items
        .iter()
        .map(|applicant| applicant.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Sarah Chen", "James Wilson"]);

    let by_role = service
        .list(&ApplicantsRequest {
            search: "engineer".to_string(),
            ..ApplicantsRequest::default()
        })
        .unwrap();
    assert_eq!(by_role.total_count, 2);

    let err = service
        .list(&ApplicantsRequest {
            status: "hired".to_string(),
            ..ApplicantsRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, QueryError::UnknownFilterValue { .. }));
}

#[test]
fn applicants_for_job_match_role_title() {
    let service = ApplicantService::new(SeedCatalog);

    let for_devops = service.for_job(5);
    assert_eq!(for_devops.len(), 1);
    assert_eq!(for_devops[0].name, "James Wilson");
    assert!(service.for_job(4).is_empty());
    assert!(service.for_job(404).is_empty());
}

#[test]
fn applicant_status_counts_cover_every_stage() {
    let counts = ApplicantService::new(SeedCatalog).status_counts();
    assert_eq!(
        counts,
        vec![
            (ApplicantStatus::New, 1),
            (ApplicantStatus::Review, 1),
            (ApplicantStatus::Interview, 2),
            (ApplicantStatus::Offer, 1),
        ]
    );
}

#[test]
fn invoices_page_newest_first() {
    let service = BillingService::with_page_size(SeedCatalog, 3);
    let first = service.invoices(&InvoicesRequest::default()).unwrap();

    assert_eq!(first.total_count, 4);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items[0].id, "INV-001");
    assert_eq!(first.items[0].display_amount(), "$299.00");

    let search = service
        .invoices(&InvoicesRequest {
            search: "inv-004".to_string(),
            ..InvoicesRequest::default()
        })
        .unwrap();
    assert_eq!(search.items.len(), 1);
    assert_eq!(search.items[0].display_amount(), "$199.00");

    let pending = service
        .invoices(&InvoicesRequest {
            status: "pending".to_string(),
            ..InvoicesRequest::default()
        })
        .unwrap();
    assert_eq!(pending.total_count, 0);
}

#[test]
fn billing_summary_reports_plan_and_capacity() {
    let service = BillingService::new(SeedCatalog);

    let plan = service.plan();
    assert_eq!(plan.name, "Professional Plan");
    assert_eq!(plan.summary(), "Up to 25 active job listings");

    let capacity = service.listing_capacity();
    assert_eq!((capacity.active, capacity.limit, capacity.remaining), (6, 25, 19));

    let card = service.payment_method();
    assert_eq!(card.masked_number(), "•••• •••• •••• 4242");
    assert_eq!(card.expiry_label(), "Expires 12/26");

    assert_eq!(service.total_paid_cents(), 109_600);
}

#[test]
fn owned_catalog_with_custom_plan_and_invoices() {
    let jobs = SeedCatalog.jobs().to_vec();
    let catalog = InMemoryCatalog::try_new(jobs)
        .unwrap()
        .with_plan(Plan {
            name: "Starter Plan".to_string(),
            max_active_listings: 4,
            price_cents: 4_900,
            interval: BillingInterval::Year,
        })
        .with_invoices(vec![
            Invoice {
                id: "INV-101".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                amount_cents: 4_900,
                status: InvoiceStatus::Paid,
            },
            Invoice {
                id: "INV-102".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                amount_cents: 4_900,
                status: InvoiceStatus::Failed,
            },
        ]);
    let service = BillingService::new(&catalog);

    assert_eq!(service.plan().summary(), "Up to 4 active job listings");
    let capacity = service.listing_capacity();
    assert_eq!((capacity.active, capacity.limit, capacity.remaining), (6, 4, 0));
    assert_eq!(service.total_paid_cents(), 4_900);

    let failed = service
        .invoices(&InvoicesRequest {
            status: "failed".to_string(),
            ..InvoicesRequest::default()
        })
        .unwrap();
    assert_eq!(failed.items.len(), 1);
    assert_eq!(failed.items[0].id, "INV-102");
}
