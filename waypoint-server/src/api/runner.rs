//! Runner API Handlers
//!
//! Fleet listing and nearest-runner lookups.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{PathRejection, QueryRejection}},
};
use waypoint_core::dto::runner::{NearestRunnerQuery, NearestRunnerResponse, RunnerSnapshot};

use crate::api::error::ApiResult;
use crate::service::runner_service;
use crate::state::AppState;

/// GET /api/runners
/// List all runners with their recent history
pub async fn list_runners(State(state): State<AppState>) -> Json<Vec<RunnerSnapshot>> {
    tracing::debug!("Listing all runners");

    let runners = runner_service::list_runners(&state.runners)
        .into_iter()
        .map(RunnerSnapshot::from)
        .collect();

    Json(runners)
}

/// GET /api/runners/{id}
/// Get details for a specific runner
pub async fn get_runner(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> ApiResult<Json<RunnerSnapshot>> {
    let Path(id) = id?;
    tracing::debug!("Getting runner: {}", id);

    let runner = runner_service::get_runner(&state.runners, id)?;

    Ok(Json(runner.into()))
}

/// GET /api/user/nearest-runner?lat=&lng=
/// Find the runner closest to the user
pub async fn nearest_runner(
    State(state): State<AppState>,
    query: Result<Query<NearestRunnerQuery>, QueryRejection>,
) -> ApiResult<Json<NearestRunnerResponse>> {
    let Query(query) = query?;

    let nearest = runner_service::find_nearest(&state.runners, query.lat, query.lng)?;

    Ok(Json(nearest.into()))
}
