//! Upstream configuration, read from the environment once at first use.

use std::time::Duration;

const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:4000";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Where the external marketplace API lives and how long we wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL of the marketplace REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout; expiry surfaces as a distinct timeout error
    /// rather than a hanging loading state.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("WL_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = std::env::var("WL_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
