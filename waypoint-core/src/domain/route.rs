//! Route domain types

use serde::{Deserialize, Serialize};

/// GeoJSON LineString as returned by the routing service.
/// Coordinates are `[lon, lat]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

/// A computed driving route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub distance_km: f64,
    pub duration_min: f64,
    pub geometry: LineString,
}
