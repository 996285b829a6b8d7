use hireboard_core::seed::sample_jobs;
use hireboard_core::{
    filter_records, run_query, FieldFilter, Job, JobField, ListQuery, QueryError, SortSpec,
};
use std::collections::BTreeMap;

fn ids(items: &[Job]) -> Vec<u32> {
    items.iter().map(|job| job.id).collect()
}

fn active_query() -> ListQuery<JobField> {
    ListQuery::new(3).with_filter(JobField::Status, FieldFilter::parse("Active"))
}

#[test]
fn status_filter_keeps_six_active_jobs() {
    let page = run_query(sample_jobs(), &active_query()).unwrap();

    assert_eq!(page.total_count, 6);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page.items), vec![1, 2, 3]);
}

#[test]
fn pages_split_filtered_results_in_order() {
    let second = run_query(sample_jobs(), &active_query().with_page(2)).unwrap();
    let third = run_query(sample_jobs(), &active_query().with_page(3)).unwrap();

    assert_eq!(ids(&second.items), vec![5, 7, 8]);
    assert_eq!((second.range_start(), second.range_end()), (4, 6));
    assert!(third.items.is_empty());
    assert_eq!(third.total_count, 6);
}

#[test]
fn page_lengths_sum_to_total_count() {
    for page_size in 1..=9 {
        let query = ListQuery::<JobField>::new(page_size);
        let first = run_query(sample_jobs(), &query).unwrap();

        let mut seen = 0;
        for page_number in 1..=first.total_pages as u32 {
            let page = run_query(sample_jobs(), &query.clone().with_page(page_number)).unwrap();
            assert!(page.items.len() <= page_size as usize);
            seen += page.items.len();
        }
        assert_eq!(seen, first.total_count, "page_size={page_size}");
    }
}

#[test]
fn search_is_case_insensitive_across_text_fields() {
    let senior = run_query(sample_jobs(), &ListQuery::new(10).with_search("senior")).unwrap();
    assert_eq!(ids(&senior.items), vec![1]);
    assert_eq!(senior.items[0].title, "Senior Frontend Developer");

    let engineer = run_query(sample_jobs(), &ListQuery::new(10).with_search("ENGINEER")).unwrap();
    assert_eq!(ids(&engineer.items), vec![1, 3, 5]);

    let remote = run_query(sample_jobs(), &ListQuery::new(10).with_search("remote")).unwrap();
    assert_eq!(ids(&remote.items), vec![4]);
}

#[test]
fn filters_are_conjunctive() {
    let query = ListQuery::new(10)
        .with_search("design")
        .with_filter(JobField::Status, FieldFilter::equals("active"))
        .with_filter(JobField::JobType, FieldFilter::equals("full-time"));
    let page = run_query(sample_jobs(), &query).unwrap();
    assert_eq!(ids(&page.items), vec![2, 8]);

    let none = run_query(
        sample_jobs(),
        &query.with_filter(JobField::JobType, FieldFilter::equals("contract")),
    )
    .unwrap();
    assert_eq!(none.total_count, 0);
    assert_eq!(none.total_pages, 0);
    assert!(none.items.is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let filters = BTreeMap::from([(JobField::Status, FieldFilter::equals("active"))]);
    let once = filter_records(sample_jobs(), "e", &filters)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let twice = filter_records(&once, "e", &filters)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(once, twice);
}

#[test]
fn sort_by_applicants_descending_puts_hr_specialist_first() {
    let query = ListQuery::new(8).with_sort(SortSpec::descending(JobField::Applicants));
    let page = run_query(sample_jobs(), &query).unwrap();

    assert_eq!(page.items[0].title, "HR Specialist");
    assert_eq!(page.items[0].applicants, 67);
    assert_eq!(page.items[1].title, "Marketing Manager");
    assert_eq!(page.items[1].applicants, 56);
    assert_eq!(ids(&sample_jobs()[..3]), vec![1, 2, 3], "input must stay untouched");
}

#[test]
fn sort_by_title_and_date() {
    let by_title = run_query(
        sample_jobs(),
        &ListQuery::new(8).with_sort(SortSpec::ascending(JobField::Title)),
    )
    .unwrap();
    assert_eq!(ids(&by_title.items), vec![3, 7, 5, 6, 4, 2, 1, 8]);

    let newest = run_query(
        sample_jobs(),
        &ListQuery::new(2).with_sort(SortSpec::descending(JobField::PostedDate)),
    )
    .unwrap();
    assert_eq!(ids(&newest.items), vec![8, 7]);
}

#[test]
fn out_of_range_page_is_empty_with_unchanged_total() {
    let page = run_query(sample_jobs(), &ListQuery::new(3).with_page(99)).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 8);
    assert_eq!(page.total_pages, 3);
    assert!(!page.has_next());
}

#[test]
fn zero_page_size_or_number_is_invalid_argument() {
    let err = run_query(sample_jobs(), &ListQuery::<JobField>::new(0)).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument {
            name: "page_size",
            value: 0,
        }
    );

    let err = run_query(sample_jobs(), &ListQuery::<JobField>::new(3).with_page(0)).unwrap_err();
    assert!(matches!(
        err,
        QueryError::InvalidArgument {
            name: "page_number",
            ..
        }
    ));
}

#[test]
fn all_filter_and_unknown_value() {
    let all = ListQuery::new(10).with_filter(JobField::Status, FieldFilter::parse("ALL"));
    assert_eq!(run_query(sample_jobs(), &all).unwrap().total_count, 8);

    let unknown =
        ListQuery::new(10).with_filter(JobField::Status, FieldFilter::equals("archived"));
    assert_eq!(run_query(sample_jobs(), &unknown).unwrap().total_count, 0);
}
