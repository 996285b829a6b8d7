//! Runtime settings for list views and logging.
//!
//! # Responsibility
//! - Load view sizes and logging options from `HIREBOARD_*` environment
//!   variables.
//! - Normalize out-of-range values to safe defaults instead of failing.
//!
//! # Invariants
//! - Every page size held by [`Settings`] is within `1..=PAGE_SIZE_MAX`.
//! - Loading settings never panics.

use crate::logging::default_log_level;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Cards per listings page.
pub const LISTINGS_PAGE_SIZE: u32 = 3;
/// Rows per applicants table page.
pub const APPLICANTS_PAGE_SIZE: u32 = 10;
/// Rows per billing history page.
pub const INVOICES_PAGE_SIZE: u32 = 12;
/// Entries in the dashboard "recent" and "top performing" panels.
pub const DASHBOARD_HIGHLIGHT_COUNT: u32 = 4;
pub const PAGE_SIZE_MAX: u32 = 50;

const ENV_PREFIX: &str = "HIREBOARD";

/// Effective settings after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub listings_page_size: u32,
    pub applicants_page_size: u32,
    pub invoices_page_size: u32,
    pub dashboard_highlight_count: u32,
    pub log_level: String,
    /// Absolute log directory; logging stays off when `None`.
    pub log_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listings_page_size: LISTINGS_PAGE_SIZE,
            applicants_page_size: APPLICANTS_PAGE_SIZE,
            invoices_page_size: INVOICES_PAGE_SIZE,
            dashboard_highlight_count: DASHBOARD_HIGHLIGHT_COUNT,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Unvalidated values as read from the config sources.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    listings_page_size: Option<u32>,
    applicants_page_size: Option<u32>,
    invoices_page_size: Option<u32>,
    dashboard_highlight_count: Option<u32>,
    log_level: Option<String>,
    log_dir: Option<String>,
}

impl Settings {
    /// Loads settings from `HIREBOARD_*` environment variables.
    ///
    /// # Errors
    /// - Returns an error when a variable cannot be parsed into its type.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::from_config(&conf)
    }

    /// Loads settings from explicit key/value overrides.
    ///
    /// Keys use the field names of [`Settings`] (`listings_page_size`).
    pub fn from_overrides<'a>(
        overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for (key, value) in overrides {
            builder = builder.set_override(key, value)?;
        }
        Self::from_config(&builder.build()?)
    }

    fn from_config(conf: &Config) -> Result<Self, ConfigError> {
        let raw: RawSettings = conf.clone().try_deserialize()?;
        let defaults = Self::default();
        Ok(Self {
            listings_page_size: normalize_page_size(
                raw.listings_page_size,
                defaults.listings_page_size,
            ),
            applicants_page_size: normalize_page_size(
                raw.applicants_page_size,
                defaults.applicants_page_size,
            ),
            invoices_page_size: normalize_page_size(
                raw.invoices_page_size,
                defaults.invoices_page_size,
            ),
            dashboard_highlight_count: normalize_page_size(
                raw.dashboard_highlight_count,
                defaults.dashboard_highlight_count,
            ),
            log_level: raw
                .log_level
                .map(|level| level.trim().to_string())
                .filter(|level| !level.is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: raw
                .log_dir
                .map(|dir| dir.trim().to_string())
                .filter(|dir| !dir.is_empty()),
        })
    }
}

/// Replaces zero with `default` and clamps to [`PAGE_SIZE_MAX`].
pub fn normalize_page_size(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(0) | None => default,
        Some(value) if value > PAGE_SIZE_MAX => PAGE_SIZE_MAX,
        Some(value) => value,
    }
}
