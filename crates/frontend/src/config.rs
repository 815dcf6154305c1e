//! Application configuration.
//!
//! Defaults can be overridden from the page query string, e.g.
//! `?data=/mock-data/other.json&log=info`.

use crate::shared::api_utils::{location_origin, location_search, resolve_url};
use serde::Deserialize;

pub const DEFAULT_DATA_URL: &str = "/mock-data/sales-data.json";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the product sales payload is fetched from
    pub data_url: String,
    pub log_level: log::Level,
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    data: Option<String>,
    log: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build the configuration from a raw query string (with or without `?`).
    ///
    /// Unparseable queries and unknown log levels fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let overrides: QueryOverrides =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

        let defaults = Self::default();
        Self {
            data_url: overrides
                .data
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(defaults.data_url),
            log_level: overrides
                .log
                .and_then(|level| level.parse::<log::Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Configuration of the running page.
    pub fn from_location() -> Self {
        let mut config = Self::from_query(&location_search());
        config.data_url = resolve_url(&location_origin(), &config.data_url);
        config
    }
}
