//! Order API Handlers
//!
//! Delivery order creation and the admin approval workflow.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use waypoint_core::dto::order::{CreateOrder, OrderResponse};

use crate::api::error::{ApiError, ApiResult};
use crate::service::order_service::{self, OrderError};
use crate::state::AppState;

const ORDER_NOT_FOUND: &str = "Order not found";
const ALREADY_PROCESSED: &str = "Order not found or already processed";
const NOT_APPROVED: &str = "Order not found or not approved";

/// Maps an order error, using `not_found` as the 404 message for unknown
/// orders and refused transitions alike
fn order_error(err: OrderError, not_found: &str) -> ApiError {
    match err {
        OrderError::InvalidCoordinates(err) => err.into(),
        OrderError::NoRunnersAvailable => ApiError::NotFound("No runners available".to_string()),
        OrderError::NotFound(_) | OrderError::InvalidState { .. } => {
            ApiError::NotFound(not_found.to_string())
        }
    }
}

// =============================================================================
// User Endpoints
// =============================================================================

/// POST /api/order/create
/// Create a pending order matched to the nearest runner
pub async fn create_order(
    State(state): State<AppState>,
    req: Result<Json<CreateOrder>, JsonRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Json(req) = req?;
    tracing::info!("Creating order at ({}, {})", req.user_lat, req.user_lng);

    let order = order_service::create_order(
        &state.runners,
        &state.orders,
        req.user_lat,
        req.user_lng,
    )
    .map_err(|e| order_error(e, ORDER_NOT_FOUND))?;

    Ok(Json(order.into()))
}

/// GET /api/order/{id}
/// Get order details by ID
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = id?;
    tracing::debug!("Getting order: {}", id);

    let order = order_service::get_order(&state.orders, &id)
        .map_err(|e| order_error(e, ORDER_NOT_FOUND))?;

    Ok(Json(order.into()))
}

// =============================================================================
// Admin Endpoints
// =============================================================================

/// GET /api/orders/pending
/// List orders awaiting approval
pub async fn list_pending_orders(State(state): State<AppState>) -> Json<Vec<OrderResponse>> {
    tracing::debug!("Listing pending orders");

    let orders = order_service::pending_orders(&state.orders)
        .into_iter()
        .map(OrderResponse::from)
        .collect();

    Json(orders)
}

/// POST /api/order/{id}/approve
pub async fn approve_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = id?;
    let order = order_service::approve_order(&state.orders, &id)
        .map_err(|e| order_error(e, ALREADY_PROCESSED))?;

    Ok(Json(order.into()))
}

/// POST /api/order/{id}/reject
pub async fn reject_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = id?;
    let order = order_service::reject_order(&state.orders, &id)
        .map_err(|e| order_error(e, ALREADY_PROCESSED))?;

    Ok(Json(order.into()))
}

/// POST /api/order/{id}/assign
/// Hand an approved order to its runner
pub async fn assign_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = id?;
    let order = order_service::assign_order(&state.orders, &id)
        .map_err(|e| order_error(e, NOT_APPROVED))?;

    Ok(Json(order.into()))
}

/// POST /api/order/{id}/complete
/// Mark an order as delivered
pub async fn complete_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<OrderResponse>> {
    let Path(id) = id?;
    let order = order_service::complete_order(&state.orders, &id)
        .map_err(|e| order_error(e, ORDER_NOT_FOUND))?;

    Ok(Json(order.into()))
}
