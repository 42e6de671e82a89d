//! # Client Configuration

use crate::errors::ClientError;
use pn_01_addressing::FamilyConfig;
use std::env;
use std::time::Duration;

/// Default REST API endpoint of a local validator.
pub const DEFAULT_REST_API_URL: &str = "http://127.0.0.1:8008";

/// Submission client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the ledger REST API, without trailing slash.
    pub rest_api_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Pause between batch status polls.
    pub poll_interval: Duration,
    /// Family the built transactions target.
    pub family: FamilyConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rest_api_url: DEFAULT_REST_API_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            poll_interval: Duration::from_millis(500),
            family: FamilyConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Client config pointed at `rest_api_url`, other settings default.
    pub fn new(rest_api_url: impl Into<String>) -> Self {
        Self {
            rest_api_url: rest_api_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PNRD_REST_API_URL`: REST API base URL (default: http://127.0.0.1:8008)
    /// - `PNRD_REQUEST_TIMEOUT_MS`: per-request timeout (default: 5000)
    /// - `PNRD_POLL_INTERVAL_MS`: status poll interval (default: 500)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let millis = |name: &str| {
            env::var(name)
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
        };
        Self {
            rest_api_url: env::var("PNRD_REST_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.rest_api_url),
            request_timeout: millis("PNRD_REQUEST_TIMEOUT_MS").unwrap_or(defaults.request_timeout),
            connect_timeout: defaults.connect_timeout,
            poll_interval: millis("PNRD_POLL_INTERVAL_MS").unwrap_or(defaults.poll_interval),
            family: defaults.family,
        }
    }

    /// Reject unusable settings.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.rest_api_url.starts_with("http://") || self.rest_api_url.starts_with("https://"))
        {
            return Err(ClientError::Config(format!(
                "rest_api_url must be an http(s) URL, got {}",
                self.rest_api_url
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(ClientError::Config(
                "poll_interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
