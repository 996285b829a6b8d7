//! Display formatting shared by view services and presentation callers.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Date format used by cards and tables (`May 15, 2023`).
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a display date (`May 15, 2023`).
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%b %d, %Y").ok()
}

/// Formats a yearly salary range in thousands (`$90k - $130k`).
pub fn format_salary_range(min: u32, max: u32) -> String {
    format!("${}k - ${}k", round_thousands(min), round_thousands(max))
}

/// Formats an amount in cents as dollars (`$299.00`).
pub fn format_amount(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Derives two-letter badge initials from the last two words of a title.
///
/// A single-word title yields one letter; blank input yields an empty string.
pub fn derive_initials(title: &str) -> String {
    let words = title.split_whitespace().collect::<Vec<_>>();
    let start = words.len().saturating_sub(2);
    words[start..]
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Trims and collapses internal whitespace runs to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

fn round_thousands(value: u32) -> u64 {
    (u64::from(value) + 500) / 1000
}
