//! Route Service
//!
//! Validates route requests and collapses every routing failure into the
//! same `success: false` response.

use waypoint_core::dto::route::{RouteQuery, RouteResponse};
use waypoint_core::geo::{GeoPoint, InvalidCoordinates};
use waypoint_routing::RouteProvider;

/// Compute a driving route.
///
/// Only invalid coordinates are an error; any failure of the routing
/// service yields `RouteResponse::failed()`.
pub async fn compute_route(
    provider: &dyn RouteProvider,
    query: &RouteQuery,
) -> Result<RouteResponse, InvalidCoordinates> {
    let start = GeoPoint::validated(query.start_lat, query.start_lng)?;
    let end = GeoPoint::validated(query.end_lat, query.end_lng)?;

    match provider.route(start, end).await {
        Ok(route) => {
            tracing::debug!(
                "Route {} -> {}: {:.2} km, {:.1} min",
                start,
                end,
                route.distance_km,
                route.duration_min
            );
            Ok(RouteResponse::found(route))
        }
        Err(e) => {
            if e.is_timeout() {
                tracing::warn!("Routing service timed out for {} -> {}", start, end);
            } else if e.is_server_error() {
                tracing::warn!("Routing service unavailable: {}", e);
            } else {
                tracing::error!("Route calculation error: {}", e);
            }
            Ok(RouteResponse::failed())
        }
    }
}
