//! Order Service
//!
//! Business logic for delivery order creation and the admin workflow.

use thiserror::Error;
use waypoint_core::domain::order::{MatchedRunner, Order, OrderAction, TransitionError};
use waypoint_core::geo::{GeoPoint, InvalidCoordinates};

use crate::repository::order::TransitionFailure;
use crate::repository::{OrderStore, RunnerStore};

/// Service error type
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    #[error("No runners available")]
    NoRunnersAvailable,

    #[error("Order {0} not found")]
    NotFound(String),

    #[error("Order {order_id}: {source}")]
    InvalidState {
        order_id: String,
        source: TransitionError,
    },
}

pub type Result<T> = std::result::Result<T, OrderError>;

/// Create a pending order matched to the runner nearest the user.
///
/// The runner's id, name and position are copied into the order; later
/// movement of that runner does not affect it. Nothing is allocated unless
/// the coordinates are valid and a runner exists.
pub fn create_order(
    runners: &RunnerStore,
    orders: &OrderStore,
    user_lat: f64,
    user_lng: f64,
) -> Result<Order> {
    let user_position = GeoPoint::validated(user_lat, user_lng)?;

    let nearest = runners
        .find_nearest(user_position.lat, user_position.lon)
        .ok_or(OrderError::NoRunnersAvailable)?;

    let matched = MatchedRunner {
        id: nearest.runner.id,
        name: nearest.runner.name,
        position: nearest.runner.position,
    };

    let order = orders.create(user_position, matched, nearest.distance_km);

    tracing::info!(
        "Order {} created at {} for runner {} ({} km)",
        order.order_id,
        user_position,
        nearest.runner.id,
        order.distance_km
    );

    Ok(order)
}

/// Get an order by ID
pub fn get_order(orders: &OrderStore, order_id: &str) -> Result<Order> {
    orders
        .get(order_id)
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
}

/// List orders awaiting approval
pub fn pending_orders(orders: &OrderStore) -> Vec<Order> {
    orders.pending()
}

/// Approve a pending order
pub fn approve_order(orders: &OrderStore, order_id: &str) -> Result<Order> {
    transition(orders, order_id, OrderAction::Approve)
}

/// Reject a pending order
pub fn reject_order(orders: &OrderStore, order_id: &str) -> Result<Order> {
    transition(orders, order_id, OrderAction::Reject)
}

/// Mark an approved order as assigned to its runner
pub fn assign_order(orders: &OrderStore, order_id: &str) -> Result<Order> {
    transition(orders, order_id, OrderAction::Assign)
}

/// Mark an order as completed, whatever its current state
pub fn complete_order(orders: &OrderStore, order_id: &str) -> Result<Order> {
    transition(orders, order_id, OrderAction::Complete)
}

fn transition(orders: &OrderStore, order_id: &str, action: OrderAction) -> Result<Order> {
    match orders.transition(order_id, action) {
        Ok(order) => {
            tracing::info!("Order {} is now {}", order.order_id, order.status);
            Ok(order)
        }
        Err(TransitionFailure::NotFound) => Err(OrderError::NotFound(order_id.to_string())),
        Err(TransitionFailure::Rejected(source)) => {
            tracing::debug!("Order {} transition refused: {}", order_id, source);
            Err(OrderError::InvalidState {
                order_id: order_id.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::domain::order::OrderStatus;
    use waypoint_core::domain::runner::RunnerSeed;

    fn alice_only() -> RunnerStore {
        RunnerStore::from_seeds(&[RunnerSeed {
            id: 1,
            name: "Alice",
            position: GeoPoint::new(13.6288, 79.4192),
        }])
    }

    #[test]
    fn test_create_order_scenario() {
        let runners = alice_only();
        let orders = OrderStore::new();

        let order = create_order(&runners, &orders, 13.6300, 79.4200).unwrap();
        assert_eq!(order.order_id, "ORD-00001");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.matched_runner.as_ref().unwrap().name, "Alice");
        assert!((order.distance_km - 0.16).abs() < 0.011, "got {}", order.distance_km);

        let id = order.order_id;
        assert_eq!(approve_order(&orders, &id).unwrap().status, OrderStatus::Approved);
        assert_eq!(assign_order(&orders, &id).unwrap().status, OrderStatus::Assigned);
        assert!(matches!(
            assign_order(&orders, &id),
            Err(OrderError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_create_order_invalid_coordinates_does_not_allocate() {
        let runners = alice_only();
        let orders = OrderStore::new();

        assert_eq!(
            create_order(&runners, &orders, 100.0, 0.0),
            Err(OrderError::InvalidCoordinates(InvalidCoordinates))
        );
        assert_eq!(
            create_order(&RunnerStore::new(), &orders, 13.63, 79.42),
            Err(OrderError::NoRunnersAvailable)
        );

        let order = create_order(&runners, &orders, 13.63, 79.42).unwrap();
        assert_eq!(order.order_id, "ORD-00001");
    }

    #[test]
    fn test_snapshot_survives_runner_movement() {
        let runners = alice_only();
        let orders = OrderStore::new();

        let order = create_order(&runners, &orders, 13.63, 79.42).unwrap();
        runners.update_position(1, 14.0, 80.0);

        let stored = get_order(&orders, &order.order_id).unwrap();
        assert_eq!(
            stored.matched_runner.unwrap().position,
            GeoPoint::new(13.6288, 79.4192)
        );
    }

    #[test]
    fn test_assign_pending_fails() {
        let runners = alice_only();
        let orders = OrderStore::new();
        let id = create_order(&runners, &orders, 13.63, 79.42).unwrap().order_id;

        let err = assign_order(&orders, &id).unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidState {
                order_id: id.clone(),
                source: TransitionError {
                    from: OrderStatus::Pending,
                    action: OrderAction::Assign,
                },
            }
        );
        assert_eq!(pending_orders(&orders).len(), 1);
    }

    #[test]
    fn test_reject_then_complete() {
        let runners = alice_only();
        let orders = OrderStore::new();
        let id = create_order(&runners, &orders, 13.63, 79.42).unwrap().order_id;

        reject_order(&orders, &id).unwrap();
        assert!(reject_order(&orders, &id).is_err());
        assert_eq!(complete_order(&orders, &id).unwrap().status, OrderStatus::Completed);
        assert!(pending_orders(&orders).is_empty());
    }

    #[test]
    fn test_unknown_order() {
        let orders = OrderStore::new();
        assert_eq!(
            get_order(&orders, "ORD-99999"),
            Err(OrderError::NotFound("ORD-99999".to_string()))
        );
        assert_eq!(
            complete_order(&orders, "ORD-99999"),
            Err(OrderError::NotFound("ORD-99999".to_string()))
        );
    }
}
