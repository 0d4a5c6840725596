//! Core library for the Goong Map gateway.
//!
//! This crate holds everything below the HTTP surface:
//!
//! - [`coordinate`]: pattern validation for `"lat,lng"` strings and delimited
//!   coordinate lists
//! - [`normalize`]: recursive snake_case → camelCase key rewrite for upstream
//!   response bodies
//! - [`GoongClient`]: outbound client for the Goong REST API
//! - [`GoongConfig`]: upstream configuration read once at startup
//! - Typed request values ([`DirectionsRequest`], [`DistanceMatrixRequest`],
//!   [`TripRequest`]) produced by the gateway's validators
//!
//! The gateway service crate provides only HTTP glue on top of this:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  axum Handler                                          │
//! │  - Parse query parameters                              │
//! │  - Validate into a typed request                       │
//! │  - Call GoongClient                                    │
//! │  - Map failures to the error envelope                  │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod coordinate;
mod error;
pub mod normalize;
mod request;

pub use client::GoongClient;
pub use config::{GoongConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use coordinate::{is_valid_latlng, is_valid_latlng_list, ORIGINS_DELIMITER, WAYPOINTS_DELIMITER};
pub use error::{Error, Result};
pub use normalize::camel_case_keys;
pub use request::{DirectionsRequest, DistanceMatrixRequest, TripRequest, UnknownVehicle, Vehicle};
