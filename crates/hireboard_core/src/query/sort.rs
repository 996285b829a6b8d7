//! Stable sort stage.

use crate::query::Queryable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sort request naming one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Comparable key extracted from a record field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Number(i64),
    Date(NaiveDate),
    Text(String),
}

/// Returns a new ordering of `records` by `spec`; ties keep input order.
pub fn sort_records<'a, R: Queryable>(records: &[&'a R], spec: SortSpec<R::Field>) -> Vec<&'a R> {
    sort_by_key(records, |record| record.sort_value(spec.field), spec.direction)
}

/// Stable sort by an arbitrary key extractor without touching the input.
///
/// Both directions keep equal keys in their original relative order.
pub fn sort_by_key<T: Clone, K: Ord>(
    items: &[T],
    key: impl Fn(&T) -> K,
    direction: SortDirection,
) -> Vec<T> {
    let mut keyed = items
        .iter()
        .map(|item| (key(item), item.clone()))
        .collect::<Vec<_>>();
    keyed.sort_by(|(left, _), (right, _)| direction.apply(left.cmp(right)));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Sorts then keeps the first `n` items.
pub fn top_n<T: Clone, K: Ord>(
    items: &[T],
    n: usize,
    key: impl Fn(&T) -> K,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = sort_by_key(items, key, direction);
    sorted.truncate(n);
    sorted
}
