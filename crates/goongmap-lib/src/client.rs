//! Outbound client for the Goong REST API.
//!
//! The client only constructs requests and normalizes successful response
//! bodies. Error classification (validation vs upstream vs unreachable) is the
//! caller's concern; transport failures are surfaced unmodified as
//! [`Error::Http`].

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::GoongConfig;
use crate::error::{Error, Result};
use crate::normalize::camel_case_keys;
use crate::request::{DirectionsRequest, DistanceMatrixRequest, TripRequest};

/// Upstream route for directions requests.
const DIRECTION_ROUTE: &str = "direction";

/// Upstream route for distance-matrix requests.
const DISTANCE_MATRIX_ROUTE: &str = "distancematrix";

/// Upstream route for trip (TSP) requests.
const TRIP_ROUTE: &str = "trip";

/// HTTP client for the Goong REST API.
///
/// Every request carries the configured API key as the `api_key` query
/// parameter and the fixed per-request timeout from [`GoongConfig`]. Every
/// successful body is passed through [`camel_case_keys`] before it is returned.
pub struct GoongClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoongClient {
    /// Build a client from the given configuration.
    pub fn new(config: &GoongConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL this client forwards to (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch directions between two points.
    pub async fn directions(&self, request: &DirectionsRequest) -> Result<Value> {
        self.get(DIRECTION_ROUTE, request.query_pairs()).await
    }

    /// Fetch a distance matrix between origin and destination lists.
    pub async fn distance_matrix(&self, request: &DistanceMatrixRequest) -> Result<Value> {
        self.get(DISTANCE_MATRIX_ROUTE, request.query_pairs()).await
    }

    /// Fetch trip instructions with optimal waypoint ordering.
    pub async fn trip(&self, request: &TripRequest) -> Result<Value> {
        self.get(TRIP_ROUTE, request.query_pairs()).await
    }

    async fn get(&self, route: &str, params: Vec<(&'static str, String)>) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, route);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 1);
        if let Some(api_key) = &self.api_key {
            query.push(("api_key", api_key.clone()));
        }
        query.extend(params);

        debug!(url = %url, "forwarding request to Goong API");

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Pull the upstream message out of the body when there is one; a
            // non-JSON body just loses the message.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from));

            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<Value>().await?;
        Ok(camel_case_keys(body))
    }
}

fn user_agent() -> String {
    format!(
        "goongmap-lib/{version}",
        version = env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = GoongConfig::default().with_base_url("http://localhost:1234/v2/");
        let client = GoongClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/v2");
    }

    #[test]
    fn test_has_api_key() {
        let without = GoongClient::new(&GoongConfig::default()).unwrap();
        assert!(!without.has_api_key());

        let with = GoongClient::new(&GoongConfig::default().with_api_key("secret")).unwrap();
        assert!(with.has_api_key());
    }
}
