//! Prometheus metrics for the gateway.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for the map endpoints

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Create configuration from `METRICS_ENABLED` (default: true).
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self { enabled }
    }
}

/// Initialize the Prometheus metrics recorder. Call once at startup.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the `/metrics` endpoint.
///
/// Returns Prometheus exposition format text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// Record a request accepted by one of the map endpoints.
///
/// Increments the `goongmap_requests_total` counter.
pub fn record_map_request(endpoint: &str) {
    metrics::counter!(
        "goongmap_requests_total",
        "endpoint" => endpoint.to_string()
    )
    .increment(1);
}

/// Record a request that ended in a failure envelope.
///
/// Increments the `goongmap_requests_failed_total` counter. Reasons:
/// "validation_error", "upstream_error", "no_response", "internal_error".
pub fn record_map_request_failed(endpoint: &str, reason: &str) {
    metrics::counter!(
        "goongmap_requests_failed_total",
        "endpoint" => endpoint.to_string(),
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record the latency of one upstream call.
///
/// Feeds the `goongmap_upstream_latency_seconds` histogram.
pub fn record_upstream_latency(endpoint: &str, duration: std::time::Duration) {
    metrics::histogram!(
        "goongmap_upstream_latency_seconds",
        "endpoint" => endpoint.to_string()
    )
    .record(duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_config_default() {
        let config = MetricsConfig::default();
        assert!(config.enabled);
    }

    #[test]
    fn test_business_metric_helpers_do_not_panic() {
        // The macros are no-ops until a recorder is installed; they must still
        // be callable.
        record_map_request("directions");
        record_map_request_failed("trip", "validation_error");
        record_map_request_failed("distance_matrix", "no_response");
        record_upstream_latency("directions", std::time::Duration::from_millis(120));
    }

    #[test]
    fn test_metrics_handler_before_init() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let output = rt.block_on(metrics_handler());
        assert!(output.starts_with('#'));
    }

    #[test]
    fn test_metrics_error_display() {
        assert_eq!(MetricsError::Disabled.to_string(), "metrics are disabled");
        assert!(MetricsError::InstallFailed("boom".to_string())
            .to_string()
            .contains("boom"));
    }
}
