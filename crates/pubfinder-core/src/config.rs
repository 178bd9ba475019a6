//! Configuration constants and endpoint resolution.
//!
//! The constants here are shared by the state model and the UI so that the
//! page size, display fallbacks and the static model metrics are defined in
//! exactly one place.
//!
//! # Endpoint resolution
//!
//! [`ClientConfig::from_env`] looks up, in order:
//!
//! 1. `PUBFINDER_SEARCH_URL`, `PUBFINDER_PREDICT_URL`, `PUBFINDER_TIMEOUT_SECS`
//! 2. The built-in defaults below
//!
//! On native targets the variables are read from the process environment.
//! On the web there is no process environment, so the same keys are captured
//! at compile time instead.

use std::time::Duration;
use thiserror::Error;
use url::Url;

// =============================================================================
// Pagination
// =============================================================================

/// Number of results rendered per page.
pub const RESULTS_PER_PAGE: usize = 5;

// =============================================================================
// Search query shape
// =============================================================================

/// Index fields the multi-match query is run against.
pub const SEARCH_FIELDS: [&str; 4] = ["title", "description", "journal", "authors"];

// =============================================================================
// Display fallbacks
// =============================================================================

pub const DEFAULT_URL: &str = "#";
pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_DESCRIPTION: &str = "No Description";
pub const DEFAULT_JOURNAL: &str = "Unknown Journal";
pub const DEFAULT_YEAR: &str = "Unknown Year";
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Category stored when the prediction response carries no `prediction` field.
pub const NO_PREDICTION: &str = "No Prediction";

/// Shown on the prediction card when the stored category is empty.
pub const NO_CATEGORY_DETECTED: &str = "No category detected";

/// Shown in place of the result list after a search that matched nothing.
pub const NO_RESULTS: &str = "No result found";

// =============================================================================
// Classifier metrics
// =============================================================================

/// Offline accuracy of the deployed classifier.
///
/// Displayed verbatim on the prediction card. Never computed from a response.
pub const MODEL_ACCURACY: &str = "67.2%";

/// Offline macro F1 of the deployed classifier. Displayed verbatim.
pub const MODEL_F1_SCORE: &str = "0.661";

// =============================================================================
// Endpoints
// =============================================================================

pub const DEFAULT_SEARCH_URL: &str = "http://127.0.0.1:9200/cu_publication/_search";
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predictions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SEARCH_URL_ENV: &str = "PUBFINDER_SEARCH_URL";
const PREDICT_URL_ENV: &str = "PUBFINDER_PREDICT_URL";
const TIMEOUT_ENV: &str = "PUBFINDER_TIMEOUT_SECS";

/// Errors raised while resolving client configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid URL for {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },
    #[error("Invalid timeout for {key}: {value}")]
    InvalidTimeout { key: &'static str, value: String },
}

/// Endpoints and transport settings for [`crate::client::ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub search_url: Url,
    pub predict_url: Url,
    /// Per-request timeout. Only honoured on native targets.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: Url::parse(DEFAULT_SEARCH_URL).expect("default search URL is valid"),
            predict_url: Url::parse(DEFAULT_PREDICT_URL).expect("default predict URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config from explicit endpoint strings.
    pub fn new(search_url: &str, predict_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            search_url: parse_endpoint(SEARCH_URL_ENV, search_url)?,
            predict_url: parse_endpoint(PREDICT_URL_ENV, predict_url)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Resolve the config from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(lookup_env)
    }

    /// Resolve the config through an arbitrary key lookup.
    ///
    /// Split out from [`ClientConfig::from_env`] so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let search = lookup(SEARCH_URL_ENV).unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
        let predict = lookup(PREDICT_URL_ENV).unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());

        let request_timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout {
                        key: TIMEOUT_ENV,
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            search_url: parse_endpoint(SEARCH_URL_ENV, &search)?,
            predict_url: parse_endpoint(PREDICT_URL_ENV, &predict)?,
            request_timeout,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn parse_endpoint(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        key,
        reason: format!("{}: {}", raw, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            key,
            reason: format!("unsupported scheme {} (only http/https allowed)", url.scheme()),
        });
    }

    Ok(url)
}

/// Unset and blank variables both mean "use the default".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
fn lookup_env(key: &str) -> Option<String> {
    let value = match key {
        SEARCH_URL_ENV => option_env!("PUBFINDER_SEARCH_URL"),
        PREDICT_URL_ENV => option_env!("PUBFINDER_PREDICT_URL"),
        TIMEOUT_ENV => option_env!("PUBFINDER_TIMEOUT_SECS"),
        _ => None,
    };
    non_blank(value.map(str::to_string))
}
