//! Geographic primitives
//!
//! Great-circle distance and coordinate validation shared by the runner
//! store, the order workflow and the routing boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude or longitude outside the WGS-84 range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid coordinates")]
pub struct InvalidCoordinates;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Builds a point without range checks
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point, rejecting latitude outside [-90, 90] and longitude
    /// outside [-180, 180]. NaN fails both checks.
    pub fn validated(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if is_valid(lat, lon) {
            Ok(Self { lat, lon })
        } else {
            Err(InvalidCoordinates)
        }
    }

    /// Haversine distance to `other` in kilometres
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// `[lat, lon]` pair, the shape used for history tracks on the wire
    pub fn as_pair(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Returns true when `lat` is in [-90, 90] and `lon` in [-180, 180]
pub fn is_valid(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the asin form `2R·asin(√a)`. Inputs are not validated; callers
/// check ranges first.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Rounds `value` to `places` decimal places.
///
/// Rounding works on the exact decimal expansion of `value` and sends ties
/// to the even digit, so `round_to(7.25, 1)` is `7.2` and `round_to(2.675, 2)`
/// is `2.67` (the stored value is slightly below 2.675).
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
