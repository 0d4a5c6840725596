//! Upstream configuration for the Goong API client.
//!
//! Configuration is read from the environment once at startup and is immutable
//! afterwards.
//!
//! # Environment Variables
//!
//! - `GOONGMAP_API_URL`: Base URL of the Goong REST API (default:
//!   `https://rsapi.goong.io/v2/`)
//! - `GOONGMAP_API_KEY`: API key attached to every outbound request as the
//!   `api_key` query parameter (optional; requests go out without it when unset)

use std::env;
use std::time::Duration;

/// Default base URL of the Goong REST API.
pub const DEFAULT_BASE_URL: &str = "https://rsapi.goong.io/v2/";

/// Fixed per-request timeout for outbound calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

const BASE_URL_ENV: &str = "GOONGMAP_API_URL";
const API_KEY_ENV: &str = "GOONGMAP_API_KEY";

/// Configuration for the upstream Goong API client.
#[derive(Debug, Clone)]
pub struct GoongConfig {
    /// Base URL of the Goong REST API.
    pub base_url: String,

    /// API key passed as a query parameter; `None` when not configured.
    pub api_key: Option<String>,

    /// Per-request timeout for outbound calls.
    pub timeout: Duration,
}

impl Default for GoongConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GoongConfig {
    /// Create configuration from environment variables.
    ///
    /// An empty `GOONGMAP_API_KEY` is treated the same as an unset one.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            base_url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GoongConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_config_builders() {
        let config = GoongConfig::default()
            .with_base_url("http://localhost:9999/")
            .with_api_key("secret")
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.base_url, "http://localhost:9999/");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
