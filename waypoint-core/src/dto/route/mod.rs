//! Route DTOs

use serde::{Deserialize, Serialize};

use crate::domain::route::RouteInfo;
use crate::geo::round_to;

/// Message returned for every routing failure, whatever the cause
pub const ROUTE_FAILURE_MESSAGE: &str = "Could not calculate route";

/// Query parameters of `GET /api/route`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

/// Route lookup result. Always sent with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub success: bool,
    pub route: Option<RouteInfo>,
    pub error: Option<String>,
}

impl RouteResponse {
    /// Successful lookup; distance rounded to 2 decimals, duration to 1
    pub fn found(route: RouteInfo) -> Self {
        RouteResponse {
            success: true,
            route: Some(RouteInfo {
                distance_km: round_to(route.distance_km, 2),
                duration_min: round_to(route.duration_min, 1),
                geometry: route.geometry,
            }),
            error: None,
        }
    }

    pub fn failed() -> Self {
        RouteResponse {
            success: false,
            route: None,
            error: Some(ROUTE_FAILURE_MESSAGE.to_string()),
        }
    }
}
