//! HTTP glue for the Goong Map gateway.
//!
//! This crate wires `goongmap-lib` into an axum service:
//!
//! - [`AppState`]: the shared upstream client
//! - [`app`]: router construction, exported so integration tests can run the
//!   service in-process
//! - [`ErrorEnvelope`]: the uniform JSON error shape
//! - [`query`]: raw query parameters and validation
//! - [`health`], [`logging`], [`metrics`]: operational endpoints and setup

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use goongmap_lib::GoongClient;

mod envelope;
mod handlers;
mod health;
pub mod logging;
pub mod metrics;
pub mod query;

pub use envelope::{
    ErrorEnvelope, ERROR_INTERNAL, ERROR_SERVICE_UNAVAILABLE, ERROR_UPSTREAM, ERROR_VALIDATION,
};
pub use health::{health_live, health_ready, HealthStatus};

/// Application state shared across handlers.
///
/// The client is immutable after startup; cloning the state only bumps a
/// reference count.
#[derive(Clone)]
pub struct AppState {
    /// Upstream Goong API client.
    pub client: Arc<GoongClient>,
}

impl AppState {
    /// Wrap a client into shared state.
    pub fn new(client: GoongClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Build the gateway router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/map/directions", get(handlers::get_directions))
        .route("/api/map/distance-matrix", get(handlers::get_distance_matrix))
        .route("/api/map/trip", get(handlers::get_trip))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
