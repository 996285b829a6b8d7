//! Query pipeline entry point.
//!
//! # Responsibility
//! - Run filter, optional sort and slice stages in a fixed order.
//! - Reject caller contract violations before touching records.
//!
//! # Invariants
//! - The pipeline never clamps `page_number`; callers own navigation state.
//! - An empty result is a normal page with `total_count == 0`.

use crate::query::filter::{filter_records, FieldFilter};
use crate::query::page::{paginate, validate_positive, Page};
use crate::query::sort::{sort_records, SortSpec};
use crate::query::Queryable;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for query APIs.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-layer error for caller contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Non-positive page size or page number.
    InvalidArgument { name: &'static str, value: i64 },
    /// Filter value that is not a member of the field's enumeration.
    UnknownFilterValue { field: &'static str, value: String },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid argument `{name}`: {value} (must be >= 1)")
            }
            Self::UnknownFilterValue { field, value } => {
                write!(f, "unknown {field} filter value `{value}`")
            }
        }
    }
}

impl Error for QueryError {}

/// Immutable query parameters for one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    /// Case-insensitive substring matched against the record's search fields.
    pub search_text: String,
    /// Conjunctive equality constraints keyed by field.
    pub filters: BTreeMap<F, FieldFilter>,
    /// Optional stable sort applied before slicing.
    pub sort: Option<SortSpec<F>>,
    pub page_size: u32,
    /// 1-based page number.
    pub page_number: u32,
}

impl<F: Ord> ListQuery<F> {
    /// Creates a query for the first page with no search, filters or sort.
    pub fn new(page_size: u32) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page_size,
            page_number: 1,
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Adds or replaces the constraint on `field`.
    pub fn with_filter(mut self, field: F, filter: FieldFilter) -> Self {
        self.filters.insert(field, filter);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }
}

/// Runs the query pipeline over `records`.
///
/// Stages: filter (search AND every filter), optional stable sort, slice.
/// `records` is never mutated.
///
/// # Errors
/// - Returns [`QueryError::InvalidArgument`] when `page_size` or
///   `page_number` is zero.
pub fn run_query<R: Queryable + Clone>(
    records: &[R],
    query: &ListQuery<R::Field>,
) -> QueryResult<Page<R>> {
    validate_positive("page_size", query.page_size)?;
    validate_positive("page_number", query.page_number)?;

    let filtered = filter_records(records, query.search_text.as_str(), &query.filters);
    let ordered = match query.sort {
        Some(spec) => sort_records(&filtered, spec),
        None => filtered,
    };
    let page = paginate(&ordered, query.page_size, query.page_number)?.map(R::clone);

    debug!(
        "event=list_query module=query status=ok records={} total={} pages={} page={} size={}",
        records.len(),
        page.total_count,
        page.total_pages,
        page.page_number,
        page.page_size
    );
    Ok(page)
}
