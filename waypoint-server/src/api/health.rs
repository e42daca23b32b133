//! Health Check API Handlers

use axum::{Json, extract::State};
use waypoint_core::dto::health::HealthResponse;

use crate::state::AppState;

/// GET /
/// Welcome message
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Waypoint API. Runner and order endpoints live under /api"
    }))
}

/// GET /api/health
/// Health check with the number of tracked runners
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        runners_count: state.runners.len(),
        timestamp: chrono::Utc::now(),
    })
}
