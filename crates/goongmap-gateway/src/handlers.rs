//! HTTP request handlers for the three map endpoints.
//!
//! Each handler validates its query string, forwards the typed request to the
//! Goong client, and translates any failure into the uniform error envelope.
//! Validation failures are rejected before any upstream call is made. Query
//! strings are extracted manually from the URI so that deserialization
//! failures (e.g. a duplicated parameter) also produce the envelope instead of
//! axum's plain-text rejection.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use goongmap_lib::Error as ClientError;

use crate::envelope::ErrorEnvelope;
use crate::metrics::{record_map_request, record_map_request_failed, record_upstream_latency};
use crate::query::{DirectionsQuery, DistanceMatrixQuery, TripQuery};
use crate::AppState;

/// Handle `GET /api/map/directions`.
pub async fn get_directions(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Value>, ErrorEnvelope> {
    let query: DirectionsQuery = parse_query("directions", &uri)?;
    let request = match query.validate() {
        Ok(request) => request,
        Err(errors) => return Err(reject("directions", uri.path(), errors)),
    };

    info!(
        origin = %request.origin,
        destination = %request.destination,
        vehicle = %request.vehicle,
        alternatives = request.alternatives,
        "handling directions request"
    );

    record_map_request("directions");
    let started = Instant::now();
    let result = state.client.directions(&request).await;
    record_upstream_latency("directions", started.elapsed());

    match result {
        Ok(body) => Ok(Json(body)),
        Err(error) => Err(fail("directions", uri.path(), &error)),
    }
}

/// Handle `GET /api/map/distance-matrix`.
pub async fn get_distance_matrix(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Value>, ErrorEnvelope> {
    let query: DistanceMatrixQuery = parse_query("distance_matrix", &uri)?;
    let request = match query.validate() {
        Ok(request) => request,
        Err(errors) => return Err(reject("distance_matrix", uri.path(), errors)),
    };

    info!(
        origins = %request.origins,
        destinations = %request.destinations,
        vehicle = %request.vehicle,
        "handling distance-matrix request"
    );

    record_map_request("distance_matrix");
    let started = Instant::now();
    let result = state.client.distance_matrix(&request).await;
    record_upstream_latency("distance_matrix", started.elapsed());

    match result {
        Ok(body) => Ok(Json(body)),
        Err(error) => Err(fail("distance_matrix", uri.path(), &error)),
    }
}

/// Handle `GET /api/map/trip`.
pub async fn get_trip(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Value>, ErrorEnvelope> {
    let query: TripQuery = parse_query("trip", &uri)?;
    let request = match query.validate() {
        Ok(request) => request,
        Err(errors) => return Err(reject("trip", uri.path(), errors)),
    };

    info!(
        origin = %request.origin,
        destination = request.destination.as_deref().unwrap_or("-"),
        waypoints = request.waypoints.as_deref().unwrap_or("-"),
        roundtrip = request.roundtrip,
        vehicle = %request.vehicle,
        "handling trip request"
    );

    record_map_request("trip");
    let started = Instant::now();
    let result = state.client.trip(&request).await;
    record_upstream_latency("trip", started.elapsed());

    match result {
        Ok(body) => Ok(Json(body)),
        Err(error) => Err(fail("trip", uri.path(), &error)),
    }
}

/// Deserialize the query string, turning extractor rejections into the
/// envelope. A malformed query string (duplicated parameter, bad encoding)
/// never produces axum's plain-text 400.
fn parse_query<T: DeserializeOwned>(endpoint: &str, uri: &Uri) -> Result<T, ErrorEnvelope> {
    match Query::<T>::try_from_uri(uri) {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(endpoint = endpoint, error = %detail, "malformed query string");
            record_map_request_failed(endpoint, "validation_error");

            let mut fields = BTreeMap::new();
            fields.insert("query".to_string(), detail);
            Err(ErrorEnvelope::validation(fields, uri.path()))
        }
    }
}

fn reject(endpoint: &str, path: &str, errors: crate::query::ValidationErrors) -> ErrorEnvelope {
    warn!(
        endpoint = endpoint,
        fields = ?errors.fields().keys().collect::<Vec<_>>(),
        "rejecting invalid request"
    );
    record_map_request_failed(endpoint, "validation_error");
    ErrorEnvelope::validation(errors.into_fields(), path)
}

fn fail(endpoint: &str, path: &str, error: &ClientError) -> ErrorEnvelope {
    warn!(endpoint = endpoint, error = %error, "upstream call failed");
    record_map_request_failed(endpoint, failure_reason(error));
    ErrorEnvelope::from_client_error(error, path)
}

/// Metric label for an upstream failure.
fn failure_reason(error: &ClientError) -> &'static str {
    match error {
        ClientError::UpstreamStatus { .. } => "upstream_error",
        other if other.is_no_response() => "no_response",
        _ => "internal_error",
    }
}
