//! List-view query pipeline.
//!
//! # Responsibility
//! - Turn a fixed record collection plus immutable query parameters into one
//!   visible page and its pagination metadata.
//! - Keep search, equality filters, sorting and slicing free of view concerns.
//!
//! # Invariants
//! - Every stage is pure: inputs are never mutated and no state is kept
//!   between calls.
//! - Filtering, sorting and slicing preserve the relative order of records
//!   that compare equal.
//! - A page never holds more than `page_size` items.

pub mod filter;
pub mod page;
pub mod pipeline;
pub mod sort;

use std::borrow::Cow;
use std::fmt::Debug;

pub use filter::{enum_filter, filter_records, FieldFilter};
pub use page::{paginate, total_pages, Page};
pub use pipeline::{run_query, ListQuery, QueryError, QueryResult};
pub use sort::{sort_by_key, sort_records, top_n, SortDirection, SortSpec, SortValue};

/// A record type with an explicit set of searchable, filterable and sortable
/// fields.
pub trait Queryable {
    /// Enumerates the fields callers may name in filters and sort specs.
    type Field: Copy + Ord + Debug + 'static;

    /// Fields matched by free-text search.
    fn search_fields() -> &'static [Self::Field];

    /// Renders one field as text for search and equality filters.
    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;

    /// Extracts a comparable key for the sort stage.
    ///
    /// Defaults to the lowercased field text.
    fn sort_value(&self, field: Self::Field) -> SortValue {
        SortValue::Text(self.field_text(field).to_lowercase())
    }
}
