//! Saved plot location models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::GpsCoordinates;

/// How a coordinate was captured
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationMethod {
    Gps,
    Manual,
}

impl fmt::Display for LocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationMethod::Gps => write!(f, "GPS"),
            LocationMethod::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for LocationMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gps" => Ok(LocationMethod::Gps),
            "manual" => Ok(LocationMethod::Manual),
            _ => Err(()),
        }
    }
}

/// A saved coordinate. Rows are appended on every capture and never
/// mutated; only the most recently captured row is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub method: LocationMethod,
    pub captured_at: DateTime<Utc>,
}

impl Coordinate {
    /// The position as passed to the upstream providers, stripped of
    /// capture metadata
    pub fn position(&self) -> GpsCoordinates {
        GpsCoordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_round_trip() {
        for method in [LocationMethod::Gps, LocationMethod::Manual] {
            let parsed: LocationMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!("carrier-pigeon".parse::<LocationMethod>().is_err());
    }

    #[test]
    fn test_position_carries_exact_decimals() {
        let coordinate = Coordinate {
            latitude: "-1.29".parse().unwrap(),
            longitude: "36.82".parse().unwrap(),
            method: LocationMethod::Gps,
            captured_at: Utc::now(),
        };

        let position = coordinate.position();
        assert_eq!(position.latitude.to_string(), "-1.29");
        assert_eq!(position.longitude.to_string(), "36.82");
    }
}
