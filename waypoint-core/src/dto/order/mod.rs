//! Order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{Order, OrderStatus};

/// Request to create a delivery order at the user's position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub user_lat: f64,
    pub user_lng: f64,
}

/// Flat order representation returned by every order endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub user_lat: f64,
    pub user_lng: f64,
    pub status: OrderStatus,
    pub nearest_runner_id: Option<u32>,
    pub nearest_runner_name: Option<String>,
    pub nearest_runner_lat: Option<f64>,
    pub nearest_runner_lng: Option<f64>,
    pub distance_km: Option<f64>,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let (runner_id, runner_name, runner_lat, runner_lng) = match order.matched_runner {
            Some(runner) => (
                Some(runner.id),
                Some(runner.name),
                Some(runner.position.lat),
                Some(runner.position.lon),
            ),
            None => (None, None, None, None),
        };

        OrderResponse {
            order_id: order.order_id,
            user_lat: order.user_position.lat,
            user_lng: order.user_position.lon,
            status: order.status,
            nearest_runner_id: runner_id,
            nearest_runner_name: runner_name,
            nearest_runner_lat: runner_lat,
            nearest_runner_lng: runner_lng,
            distance_km: Some(order.distance_km),
            created_time: order.created_time,
            updated_time: order.updated_time,
        }
    }
}
