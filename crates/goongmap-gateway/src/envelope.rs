//! Uniform JSON error envelope.
//!
//! Every failure path in the gateway produces exactly one of these, with the
//! HTTP status of the response mirrored in the body.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use goongmap_lib::Error as ClientError;

/// Category label for request validation failures.
pub const ERROR_VALIDATION: &str = "Validation Error";

/// Category label for non-2xx answers from the Goong API.
pub const ERROR_UPSTREAM: &str = "Error from Goong API";

/// Category label for outbound calls that got no response at all.
pub const ERROR_SERVICE_UNAVAILABLE: &str = "Service Unavailable";

/// Category label for unexpected failures.
pub const ERROR_INTERNAL: &str = "Internal Server Error";

const VALIDATION_MESSAGE: &str = "Invalid request parameters";
const NO_RESPONSE_MESSAGE: &str = "No response received from Goong API";
const UPSTREAM_FALLBACK_MESSAGE: &str =
    "An error occurred while fetching directions from Goong API";

/// Uniform error response body.
///
/// Created fresh per failure and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Category label (one of the `ERROR_*` constants).
    pub error: String,

    /// Human-readable detail for this occurrence.
    pub message: String,

    /// HTTP status code, mirrored from the response.
    pub status: u16,

    /// Creation instant, ISO-8601 with millisecond precision, UTC.
    pub timestamp: String,

    /// Inbound request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Field path → message map, present only for validation failures.
    #[serde(rename = "validationErrors", skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ErrorEnvelope {
    /// Create a new envelope with required fields.
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: None,
            validation_errors: None,
        }
    }

    /// Attach the inbound request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Create a 400 envelope carrying the full field → message map.
    pub fn validation(errors: BTreeMap<String, String>, path: impl Into<String>) -> Self {
        let mut envelope = Self::new(ERROR_VALIDATION, VALIDATION_MESSAGE, StatusCode::BAD_REQUEST)
            .with_path(path);
        envelope.validation_errors = Some(errors);
        envelope
    }

    /// Create an envelope mirroring an upstream non-2xx answer.
    ///
    /// The status is taken from the upstream response; the message from the
    /// upstream body when present, else a generic fallback.
    pub fn upstream(status: u16, message: Option<String>, path: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(
            ERROR_UPSTREAM,
            message.unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
            status,
        )
        .with_path(path)
    }

    /// Create a 503 envelope for outbound calls that received no response.
    pub fn service_unavailable(path: impl Into<String>) -> Self {
        Self::new(
            ERROR_SERVICE_UNAVAILABLE,
            NO_RESPONSE_MESSAGE,
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_path(path)
    }

    /// Create a 500 envelope for unexpected failures.
    pub fn internal_error(detail: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ERROR_INTERNAL, detail, StatusCode::INTERNAL_SERVER_ERROR).with_path(path)
    }

    /// Classify a client error into the matching envelope.
    ///
    /// Non-2xx answers keep the upstream status; transport failures without a
    /// response become 503; everything else degrades to 500.
    pub fn from_client_error(error: &ClientError, path: &str) -> Self {
        match error {
            ClientError::UpstreamStatus { status, message } => {
                Self::upstream(*status, message.clone(), path)
            }
            other if other.is_no_response() => Self::service_unavailable(path),
            other => Self::internal_error(other.to_string(), path),
        }
    }
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorEnvelope {}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_new() {
        let envelope = ErrorEnvelope::new(ERROR_INTERNAL, "boom", StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error, "Internal Server Error");
        assert_eq!(envelope.message, "boom");
        assert_eq!(envelope.status, 500);
        assert!(envelope.path.is_none());
        assert!(envelope.validation_errors.is_none());
        // ISO-8601 with UTC designator.
        assert!(envelope.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_validation_envelope() {
        let mut errors = BTreeMap::new();
        errors.insert("query.origin".to_string(), "origin is required".to_string());

        let envelope = ErrorEnvelope::validation(errors, "/api/map/directions");
        assert_eq!(envelope.error, ERROR_VALIDATION);
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.path.as_deref(), Some("/api/map/directions"));
        assert_eq!(
            envelope.validation_errors.as_ref().unwrap()["query.origin"],
            "origin is required"
        );
    }

    #[test]
    fn test_upstream_envelope_keeps_status_and_message() {
        let envelope = ErrorEnvelope::upstream(404, Some("not found".to_string()), "/api/map/trip");
        assert_eq!(envelope.error, ERROR_UPSTREAM);
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.message, "not found");
    }

    #[test]
    fn test_upstream_envelope_fallback_message() {
        let envelope = ErrorEnvelope::upstream(500, None, "/api/map/directions");
        assert_eq!(envelope.message, UPSTREAM_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_service_unavailable_envelope() {
        let envelope = ErrorEnvelope::service_unavailable("/api/map/directions");
        assert_eq!(envelope.error, ERROR_SERVICE_UNAVAILABLE);
        assert_eq!(envelope.status, 503);
        assert_eq!(envelope.message, NO_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_from_client_error_upstream_status() {
        let error = ClientError::UpstreamStatus {
            status: 404,
            message: Some("not found".to_string()),
        };
        let envelope = ErrorEnvelope::from_client_error(&error, "/api/map/directions");
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.error, ERROR_UPSTREAM);
        assert_eq!(envelope.message, "not found");
    }

    #[test]
    fn test_serialization_shape() {
        let envelope = ErrorEnvelope::upstream(404, Some("not found".to_string()), "/api/map/trip");
        let json = serde_json::to_string(&envelope).unwrap();

        assert!(json.contains("\"error\":\"Error from Goong API\""));
        assert!(json.contains("\"message\":\"not found\""));
        assert!(json.contains("\"status\":404"));
        assert!(json.contains("\"timestamp\":"));
        assert!(json.contains("\"path\":\"/api/map/trip\""));
        // Absent optional fields are omitted entirely.
        assert!(!json.contains("validationErrors"));
    }

    #[test]
    fn test_validation_errors_serialized_under_camel_key() {
        let mut errors = BTreeMap::new();
        errors.insert("query.vehicle".to_string(), "bad".to_string());
        let envelope = ErrorEnvelope::validation(errors, "/api/map/trip");
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"validationErrors\":{\"query.vehicle\":\"bad\"}"));
    }
}
