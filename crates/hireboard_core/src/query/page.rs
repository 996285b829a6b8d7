//! Slice stage and pagination metadata.

use crate::query::pipeline::{QueryError, QueryResult};
use serde::Serialize;

/// One visible page of a filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// At most `page_size` items, in pipeline order.
    pub items: Vec<T>,
    /// Number of records that passed the filter stage.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`, zero for an empty result.
    pub total_pages: usize,
    /// Requested 1-based page number, never clamped.
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based position of the first visible item, or 0 when the page is empty.
    pub fn range_start(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        self.offset() + 1
    }

    /// 1-based position of the last visible item, or 0 when the page is empty.
    pub fn range_end(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        self.offset() + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        (self.page_number as usize) < self.total_pages
    }

    /// Converts items while keeping pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }

    fn offset(&self) -> usize {
        (self.page_number as usize - 1) * self.page_size as usize
    }
}

/// Returns `ceil(total_count / page_size)`.
///
/// `page_size` must be positive.
pub fn total_pages(total_count: usize, page_size: u32) -> usize {
    total_count.div_ceil(page_size as usize)
}

/// Slices `[(page_number - 1) * page_size, page_number * page_size)` of
/// `items`.
///
/// A page past the end is empty; `total_count` still reports all items.
///
/// # Errors
/// - Returns [`QueryError::InvalidArgument`] when `page_size` or
///   `page_number` is zero.
pub fn paginate<T: Clone>(items: &[T], page_size: u32, page_number: u32) -> QueryResult<Page<T>> {
    validate_positive("page_size", page_size)?;
    validate_positive("page_number", page_number)?;

    let start = (page_number as usize - 1).saturating_mul(page_size as usize);
    let visible = items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    Ok(Page {
        items: visible,
        total_count: items.len(),
        total_pages: total_pages(items.len(), page_size),
        page_number,
        page_size,
    })
}

pub(crate) fn validate_positive(name: &'static str, value: u32) -> QueryResult<()> {
    if value == 0 {
        return Err(QueryError::InvalidArgument {
            name,
            value: i64::from(value),
        });
    }
    Ok(())
}
