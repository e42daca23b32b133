//! Location API Handlers
//!
//! Map click log, selected destination and saved favorites.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use waypoint_core::domain::location::SavedLocation;
use waypoint_core::dto::location::{
    ClickLog, ClickLogged, CoordinateQuery, LocationDeleted, LocationSaved, SaveLocation,
    UpdateLocation, UserLocationResponse, UserLocationUpdated,
};

use crate::api::error::ApiResult;
use crate::service::location_service;
use crate::state::AppState;

/// POST /api/coordinates/log?lat=&lng=
/// Record a map click
pub async fn log_coordinate(
    State(state): State<AppState>,
    query: Result<Query<CoordinateQuery>, QueryRejection>,
) -> ApiResult<Json<ClickLogged>> {
    let Query(query) = query?;

    let log = location_service::log_click(&state.locations, query.lat, query.lng)?;

    Ok(Json(ClickLogged { success: true, log }))
}

/// GET /api/coordinates/log
/// The 20 most recent clicks
pub async fn list_coordinate_logs(State(state): State<AppState>) -> Json<ClickLog> {
    Json(ClickLog {
        coordinates: location_service::recent_clicks(&state.locations),
    })
}

/// POST /api/user/location
/// Update the selected destination
pub async fn set_user_location(
    State(state): State<AppState>,
    req: Result<Json<UpdateLocation>, JsonRejection>,
) -> ApiResult<Json<UserLocationUpdated>> {
    let Json(req) = req?;

    let location =
        location_service::set_user_location(&state.locations, req.latitude, req.longitude)?;

    Ok(Json(UserLocationUpdated {
        success: true,
        location,
    }))
}

/// GET /api/user/location
pub async fn get_user_location(State(state): State<AppState>) -> Json<UserLocationResponse> {
    Json(location_service::user_location(&state.locations).into())
}

/// POST /api/user/locations/save
/// Save a favorite; an existing name (any case) is overwritten
pub async fn save_location(
    State(state): State<AppState>,
    req: Result<Json<SaveLocation>, JsonRejection>,
) -> ApiResult<Json<LocationSaved>> {
    let Json(req) = req?;

    let location =
        location_service::save_location(&state.locations, &req.name, req.latitude, req.longitude)?;

    Ok(Json(LocationSaved {
        success: true,
        location,
    }))
}

/// GET /api/user/locations/saved
pub async fn list_saved_locations(State(state): State<AppState>) -> Json<Vec<SavedLocation>> {
    Json(location_service::saved_locations(&state.locations))
}

/// DELETE /api/user/locations/{name}
pub async fn delete_saved_location(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<LocationDeleted>> {
    let Path(name) = name?;
    location_service::delete_location(&state.locations, &name)?;

    Ok(Json(LocationDeleted {
        success: true,
        message: format!("Location '{}' deleted", name),
    }))
}
