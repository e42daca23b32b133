//! Route API Handler

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use waypoint_core::dto::route::{RouteQuery, RouteResponse};

use crate::api::error::ApiResult;
use crate::service::route_service;
use crate::state::AppState;

/// GET /api/route?start_lat=&start_lng=&end_lat=&end_lng=
/// Driving route between two points.
///
/// Routing failures are reported in the body with HTTP 200; only invalid
/// coordinates produce an error status.
pub async fn get_route(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> ApiResult<Json<RouteResponse>> {
    let Query(query) = query?;

    let response = route_service::compute_route(state.router.as_ref(), &query).await?;

    Ok(Json(response))
}
