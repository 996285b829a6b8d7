//! Search and equality filter stage.

use crate::query::pipeline::{QueryError, QueryResult};
use crate::query::Queryable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel accepted by [`FieldFilter::parse`] meaning "no constraint".
pub const FILTER_ALL: &str = "all";

/// Constraint on one record field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFilter {
    /// No constraint on this field.
    #[default]
    All,
    /// Case-insensitive equality against the field text.
    Equals(String),
}

impl FieldFilter {
    /// Parses select-box input; `all` (any case) and blank input mean no
    /// constraint.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(FILTER_ALL) {
            Self::All
        } else {
            Self::Equals(trimmed.to_string())
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::Equals(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns whether `text` satisfies this constraint.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Equals(expected) => text.to_lowercase() == expected.to_lowercase(),
        }
    }
}

/// Parses select-box input for a field backed by a closed enumeration.
///
/// # Errors
/// - Returns [`QueryError::UnknownFilterValue`] when `known` rejects a
///   constrained value.
pub fn enum_filter(
    field: &'static str,
    raw: &str,
    known: impl Fn(&str) -> bool,
) -> QueryResult<FieldFilter> {
    let filter = FieldFilter::parse(raw);
    if let FieldFilter::Equals(value) = &filter {
        if !known(value) {
            return Err(QueryError::UnknownFilterValue {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(filter)
}

/// Keeps records matching the search text and every filter, in input order.
///
/// An empty `search_text` matches every record.
pub fn filter_records<'a, R: Queryable>(
    records: &'a [R],
    search_text: &str,
    filters: &BTreeMap<R::Field, FieldFilter>,
) -> Vec<&'a R> {
    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| {
            matches_search(*record, needle.as_str()) && matches_filters(*record, filters)
        })
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search<R: Queryable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    R::search_fields()
        .iter()
        .any(|field| record.field_text(*field).to_lowercase().contains(needle))
}

fn matches_filters<R: Queryable>(record: &R, filters: &BTreeMap<R::Field, FieldFilter>) -> bool {
    filters
        .iter()
        .all(|(field, filter)| filter.is_all() || filter.accepts(&record.field_text(*field)))
}

#[cfg(test)]
mod tests {
    use super::{enum_filter, FieldFilter};
    use crate::query::QueryError;

    #[test]
    fn parse_treats_all_and_blank_as_unconstrained() {
        assert_eq!(FieldFilter::parse("all"), FieldFilter::All);
        assert_eq!(FieldFilter::parse(" ALL "), FieldFilter::All);
        assert_eq!(FieldFilter::parse(""), FieldFilter::All);
        assert_eq!(
            FieldFilter::parse(" active "),
            FieldFilter::Equals("active".to_string())
        );
    }

    #[test]
    fn equality_ignores_case() {
        let filter = FieldFilter::equals("full-time");
        assert!(filter.accepts("Full-time"));
        assert!(!filter.accepts("Part-time"));
        assert!(FieldFilter::All.accepts("anything"));
    }

    #[test]
    fn enum_filter_rejects_unknown_values_only() {
        let known = |value: &str| value.eq_ignore_ascii_case("open");

        assert_eq!(enum_filter("state", "all", known), Ok(FieldFilter::All));
        assert_eq!(
            enum_filter("state", " OPEN ", known),
            Ok(FieldFilter::Equals("OPEN".to_string()))
        );
        assert_eq!(
            enum_filter("state", "archived", known),
            Err(QueryError::UnknownFilterValue {
                field: "state",
                value: "archived".to_string(),
            })
        );
    }
}
