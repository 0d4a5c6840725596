//! Raw query parameters and validation for the map endpoints.
//!
//! Each endpoint deserializes its query string into an all-optional raw struct,
//! then `validate()` coerces it into a typed request from `goongmap-lib` or
//! returns the full field → message map. Independent fields never short-circuit
//! each other: a request with a bad origin and a missing destination reports
//! both.

use std::collections::BTreeMap;

use serde::Deserialize;

use goongmap_lib::{
    is_valid_latlng, is_valid_latlng_list, DirectionsRequest, DistanceMatrixRequest, TripRequest,
    Vehicle, ORIGINS_DELIMITER, WAYPOINTS_DELIMITER,
};

/// Accumulated validation failures, keyed by dotted field path
/// (e.g. `query.origin`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.insert(format!("query.{}", field), message.into());
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the field → message map.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Consume into the field → message map.
    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// Raw query parameters for `GET /api/map/directions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub vehicle: Option<String>,
    pub alternatives: Option<String>,
}

impl DirectionsQuery {
    /// Validate and apply defaults.
    pub fn validate(self) -> Result<DirectionsRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let origin = require_coordinate(&mut errors, "origin", self.origin);
        let destination = require_coordinate(&mut errors, "destination", self.destination);
        let vehicle = parse_vehicle(&mut errors, self.vehicle);
        let alternatives = parse_flag(&mut errors, "alternatives", self.alternatives);

        match (origin, destination, vehicle, alternatives) {
            (Some(origin), Some(destination), Some(vehicle), Some(alternatives))
                if errors.is_empty() =>
            {
                Ok(DirectionsRequest {
                    origin,
                    destination,
                    vehicle,
                    alternatives,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Raw query parameters for `GET /api/map/distance-matrix`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistanceMatrixQuery {
    pub origins: Option<String>,
    pub destinations: Option<String>,
    pub vehicle: Option<String>,
}

impl DistanceMatrixQuery {
    /// Validate and apply defaults.
    pub fn validate(self) -> Result<DistanceMatrixRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let origins = require_coordinate_list(&mut errors, "origins", self.origins, ORIGINS_DELIMITER);
        let destinations =
            require_coordinate_list(&mut errors, "destinations", self.destinations, ORIGINS_DELIMITER);
        let vehicle = parse_vehicle(&mut errors, self.vehicle);

        match (origins, destinations, vehicle) {
            (Some(origins), Some(destinations), Some(vehicle)) if errors.is_empty() => {
                Ok(DistanceMatrixRequest {
                    origins,
                    destinations,
                    vehicle,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Raw query parameters for `GET /api/map/trip`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub waypoints: Option<String>,
    pub roundtrip: Option<String>,
    pub vehicle: Option<String>,
}

impl TripQuery {
    /// Validate and apply defaults.
    ///
    /// The destination/waypoints cross-field rule runs only once every
    /// per-field check passed; its failure is attributed to `destination`.
    pub fn validate(self) -> Result<TripRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let origin = require_coordinate(&mut errors, "origin", self.origin);
        let destination = optional_coordinate(&mut errors, "destination", self.destination);
        let waypoints =
            optional_coordinate_list(&mut errors, "waypoints", self.waypoints, WAYPOINTS_DELIMITER);
        let roundtrip = parse_flag(&mut errors, "roundtrip", self.roundtrip);
        let vehicle = parse_vehicle(&mut errors, self.vehicle);

        if errors.is_empty() {
            if let (Some(None), Some(None)) = (&destination, &waypoints) {
                errors.add(
                    "destination",
                    "at least one of destination or waypoints is required",
                );
            }
        }

        match (origin, destination, waypoints, roundtrip, vehicle) {
            (Some(origin), Some(destination), Some(waypoints), Some(roundtrip), Some(vehicle))
                if errors.is_empty() =>
            {
                Ok(TripRequest {
                    origin,
                    destination,
                    waypoints,
                    roundtrip,
                    vehicle,
                })
            }
            _ => Err(errors),
        }
    }
}

fn require_coordinate(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, format!("{} is required", field));
            None
        }
        Some(value) if is_valid_latlng(&value) => Some(value),
        Some(_) => {
            errors.add(field, format!("{} must be in 'lat,lng' format", field));
            None
        }
    }
}

/// Validate an optional coordinate field. `Some(None)` means the field is
/// absent (which is fine here); `None` means it was present but malformed.
fn optional_coordinate(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<Option<String>> {
    match value {
        None => Some(None),
        Some(value) if is_valid_latlng(&value) => Some(Some(value)),
        Some(_) => {
            errors.add(field, format!("{} must be in 'lat,lng' format", field));
            None
        }
    }
}

fn require_coordinate_list(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    delimiter: char,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, format!("{} is required", field));
            None
        }
        Some(value) if is_valid_latlng_list(&value, delimiter) => Some(value),
        Some(_) => {
            errors.add(
                field,
                format!(
                    "{} must be a list of 'lat,lng' coordinates separated by '{}'",
                    field, delimiter
                ),
            );
            None
        }
    }
}

fn optional_coordinate_list(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    delimiter: char,
) -> Option<Option<String>> {
    match value {
        None => Some(None),
        Some(value) if is_valid_latlng_list(&value, delimiter) => Some(Some(value)),
        Some(_) => {
            errors.add(
                field,
                format!(
                    "{} must be a list of 'lat,lng' coordinates separated by '{}'",
                    field, delimiter
                ),
            );
            None
        }
    }
}

fn parse_vehicle(errors: &mut ValidationErrors, value: Option<String>) -> Option<Vehicle> {
    match value {
        None => Some(Vehicle::default()),
        Some(value) => match value.parse() {
            Ok(vehicle) => Some(vehicle),
            Err(_) => {
                errors.add("vehicle", "vehicle must be one of car, bike, taxi, truck, hd");
                None
            }
        },
    }
}

fn parse_flag(errors: &mut ValidationErrors, field: &str, value: Option<String>) -> Option<bool> {
    match value.as_deref() {
        None => Some(false),
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(_) => {
            errors.add(field, format!("{} must be 'true' or 'false'", field));
            None
        }
    }
}
