//! Typed request values forwarded to the Goong API.
//!
//! These types are produced by the gateway's validators; by the time one
//! exists, every field has passed the coordinate/enum/flag checks and defaults
//! have been applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vehicle types supported by the Goong API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Vehicle {
    Car,
    /// Default when the query parameter is absent.
    #[default]
    Bike,
    Taxi,
    Truck,
    Hd,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vehicle::Car => "car",
            Vehicle::Bike => "bike",
            Vehicle::Taxi => "taxi",
            Vehicle::Truck => "truck",
            Vehicle::Hd => "hd",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a vehicle string is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle type: {0}")]
pub struct UnknownVehicle(pub String);

impl FromStr for Vehicle {
    type Err = UnknownVehicle;

    /// Case-sensitive: the upstream contract only accepts lowercase values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Vehicle::Car),
            "bike" => Ok(Vehicle::Bike),
            "taxi" => Ok(Vehicle::Taxi),
            "truck" => Ok(Vehicle::Truck),
            "hd" => Ok(Vehicle::Hd),
            other => Err(UnknownVehicle(other.to_string())),
        }
    }
}

/// Validated parameters for the directions endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    /// Starting point as `"lat,lng"`.
    pub origin: String,
    /// Destination point as `"lat,lng"`.
    pub destination: String,
    /// Vehicle type.
    pub vehicle: Vehicle,
    /// Whether to request alternative routes.
    pub alternatives: bool,
}

impl DirectionsRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("vehicle", self.vehicle.to_string()),
            ("alternatives", self.alternatives.to_string()),
        ]
    }
}

/// Validated parameters for the distance-matrix endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrixRequest {
    /// Starting points joined by `|`.
    pub origins: String,
    /// Destination points joined by `|`.
    pub destinations: String,
    /// Vehicle type.
    pub vehicle: Vehicle,
}

impl DistanceMatrixRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origins", self.origins.clone()),
            ("destinations", self.destinations.clone()),
            ("vehicle", self.vehicle.to_string()),
        ]
    }
}

/// Validated parameters for the trip (TSP) endpoint.
///
/// At least one of `destination` or `waypoints` is always present; the
/// validator rejects requests carrying neither.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    /// Starting point as `"lat,lng"`.
    pub origin: String,
    /// Optional destination point as `"lat,lng"`.
    pub destination: Option<String>,
    /// Optional intermediate waypoints joined by `;`.
    pub waypoints: Option<String>,
    /// Whether the trip should return to the origin.
    pub roundtrip: bool,
    /// Vehicle type.
    pub vehicle: Vehicle,
}

impl TripRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("origin", self.origin.clone())];
        if let Some(destination) = &self.destination {
            pairs.push(("destination", destination.clone()));
        }
        if let Some(waypoints) = &self.waypoints {
            pairs.push(("waypoints", waypoints.clone()));
        }
        pairs.push(("roundtrip", self.roundtrip.to_string()));
        pairs.push(("vehicle", self.vehicle.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_parse() {
        assert_eq!("car".parse::<Vehicle>().unwrap(), Vehicle::Car);
        assert_eq!("bike".parse::<Vehicle>().unwrap(), Vehicle::Bike);
        assert_eq!("hd".parse::<Vehicle>().unwrap(), Vehicle::Hd);
    }

    #[test]
    fn test_vehicle_parse_is_case_sensitive() {
        assert!("Car".parse::<Vehicle>().is_err());
        assert!("BIKE".parse::<Vehicle>().is_err());
        assert!("plane".parse::<Vehicle>().is_err());
        assert!("".parse::<Vehicle>().is_err());
    }

    #[test]
    fn test_vehicle_default_is_bike() {
        assert_eq!(Vehicle::default(), Vehicle::Bike);
    }

    #[test]
    fn test_vehicle_display_roundtrip() {
        for vehicle in [
            Vehicle::Car,
            Vehicle::Bike,
            Vehicle::Taxi,
            Vehicle::Truck,
            Vehicle::Hd,
        ] {
            assert_eq!(vehicle.to_string().parse::<Vehicle>().unwrap(), vehicle);
        }
    }

    #[test]
    fn test_directions_query_pairs() {
        let request = DirectionsRequest {
            origin: "21.0,105.8".to_string(),
            destination: "21.1,105.9".to_string(),
            vehicle: Vehicle::default(),
            alternatives: false,
        };
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("origin", "21.0,105.8".to_string()));
        assert_eq!(pairs[2], ("vehicle", "bike".to_string()));
        assert_eq!(pairs[3], ("alternatives", "false".to_string()));
    }

    #[test]
    fn test_trip_query_pairs_skip_absent_fields() {
        let request = TripRequest {
            origin: "21.0,105.8".to_string(),
            destination: None,
            waypoints: Some("21.1,105.9;21.2,106.0".to_string()),
            roundtrip: true,
            vehicle: Vehicle::Taxi,
        };
        let pairs = request.query_pairs();
        assert!(pairs.iter().all(|(name, _)| *name != "destination"));
        assert!(pairs
            .iter()
            .any(|(name, value)| *name == "waypoints" && value.contains(';')));
        assert!(pairs
            .iter()
            .any(|(name, value)| *name == "roundtrip" && value == "true"));
    }
}
