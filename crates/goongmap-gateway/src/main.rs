//! Goong Map gateway HTTP microservice.
//!
//! A stateless pass-through in front of the Goong REST API: validates query
//! parameters, forwards them upstream, normalizes response key casing, and
//! maps provider/network errors to a uniform JSON envelope.
//!
//! # Endpoints
//!
//! - `GET /api/map/directions` - Directions between two points
//! - `GET /api/map/distance-matrix` - Distance matrix between coordinate lists
//! - `GET /api/map/trip` - Trip instructions with optimal waypoint ordering
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `GOONGMAP_API_URL` - Upstream base URL (default: https://rsapi.goong.io/v2/)
//! - `GOONGMAP_API_KEY` - Upstream API key
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};

use goongmap_gateway::logging::{init_logging, LoggingConfig};
use goongmap_gateway::metrics::{init_metrics, MetricsConfig};
use goongmap_gateway::{app, AppState};
use goongmap_lib::{GoongClient, GoongConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let config = GoongConfig::from_env();
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    if config.api_key.is_none() {
        warn!("GOONGMAP_API_KEY is not set; upstream requests will go out unauthenticated");
    }

    info!(base_url = %config.base_url, port = port, "starting goongmap gateway");

    let client = GoongClient::new(&config)?;
    let state = AppState::new(client);

    let router = app(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
