//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod location;
pub mod order;
pub mod route;
pub mod runner;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::error::ApiError;
use crate::state::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        // Runner endpoints
        .route("/api/runners", get(runner::list_runners))
        .route("/api/runners/{id}", get(runner::get_runner))
        .route("/api/user/nearest-runner", get(runner::nearest_runner))
        // Routing
        .route("/api/route", get(route::get_route))
        // Location bookkeeping
        .route(
            "/api/coordinates/log",
            post(location::log_coordinate).get(location::list_coordinate_logs),
        )
        .route(
            "/api/user/location",
            post(location::set_user_location).get(location::get_user_location),
        )
        .route("/api/user/locations/save", post(location::save_location))
        .route("/api/user/locations/saved", get(location::list_saved_locations))
        .route("/api/user/locations/{name}", delete(location::delete_saved_location))
        // Order endpoints
        .route("/api/order/create", post(order::create_order))
        .route("/api/orders/pending", get(order::list_pending_orders))
        .route("/api/order/{id}", get(order::get_order))
        .route("/api/order/{id}/approve", post(order::approve_order))
        .route("/api/order/{id}/reject", post(order::reject_order))
        .route("/api/order/{id}/assign", post(order::assign_order))
        .route("/api/order/{id}/complete", post(order::complete_order))
        // Unmatched paths and methods
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
