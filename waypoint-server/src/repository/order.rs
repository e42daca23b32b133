//! Order Repository
//!
//! In-memory store of delivery orders. Every status change goes through
//! the domain state machine while the store lock is held.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use waypoint_core::domain::order::{
    MatchedRunner, Order, OrderAction, OrderStatus, TransitionError, format_order_id,
};
use waypoint_core::geo::GeoPoint;

/// Failure of a transition request
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionFailure {
    NotFound,
    Rejected(TransitionError),
}

#[derive(Debug, Default)]
struct OrderTable {
    /// Orders in creation order
    orders: Vec<Order>,
    /// order_id -> index into `orders`
    index: HashMap<String, usize>,
    /// Number of orders ever created
    counter: u64,
}

/// Order store guarded by a single lock
#[derive(Debug, Default)]
pub struct OrderStore {
    table: Mutex<OrderTable>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new pending order and allocate its id.
    ///
    /// `distance_km` is stored rounded to 2 decimals.
    pub fn create(
        &self,
        user_position: GeoPoint,
        runner: MatchedRunner,
        distance_km: f64,
    ) -> Order {
        let now = Utc::now();
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);

        table.counter += 1;
        let order = Order {
            order_id: format_order_id(table.counter),
            user_position,
            status: OrderStatus::Pending,
            matched_runner: Some(runner),
            distance_km: waypoint_core::geo::round_to(distance_km, 2),
            created_time: now,
            updated_time: now,
        };

        let position = table.orders.len();
        table.index.insert(order.order_id.clone(), position);
        table.orders.push(order.clone());

        order
    }

    /// Order by id
    pub fn get(&self, order_id: &str) -> Option<Order> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table
            .index
            .get(order_id)
            .map(|&position| table.orders[position].clone())
    }

    /// Orders currently pending, in creation order
    pub fn pending(&self) -> Vec<Order> {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .cloned()
            .collect()
    }

    /// Apply `action` to an order, returning the updated record
    pub fn transition(
        &self,
        order_id: &str,
        action: OrderAction,
    ) -> Result<Order, TransitionFailure> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        let position = *table
            .index
            .get(order_id)
            .ok_or(TransitionFailure::NotFound)?;

        let order = &mut table.orders[position];
        order.apply(action).map_err(TransitionFailure::Rejected)?;

        Ok(order.clone())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> MatchedRunner {
        MatchedRunner {
            id: 1,
            name: "Alice".to_string(),
            position: GeoPoint::new(13.6288, 79.4192),
        }
    }

    fn create(store: &OrderStore) -> Order {
        store.create(GeoPoint::new(13.63, 79.42), alice(), 0.15649)
    }

    #[test]
    fn test_create_allocates_sequential_ids() {
        let store = OrderStore::new();
        assert_eq!(create(&store).order_id, "ORD-00001");
        assert_eq!(create(&store).order_id, "ORD-00002");
        assert_eq!(create(&store).order_id, "ORD-00003");
        assert!(store.get("ORD-00003").is_some());
        assert!(store.get("ORD-00004").is_none());
    }

    #[test]
    fn test_create_snapshots_runner_and_rounds_distance() {
        let store = OrderStore::new();
        let order = create(&store);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.matched_runner, Some(alice()));
        assert_eq!(order.distance_km, 0.16);
        assert_eq!(order.created_time, order.updated_time);
        assert_eq!(store.get("ORD-00001"), Some(order));
    }

    #[test]
    fn test_get_unknown() {
        let store = OrderStore::new();
        assert!(store.get("ORD-00001").is_none());
        assert!(store.pending().is_empty());
    }

    #[test]
    fn test_pending_in_creation_order() {
        let store = OrderStore::new();
        for _ in 0..4 {
            create(&store);
        }
        store.transition("ORD-00002", OrderAction::Approve).unwrap();

        let ids: Vec<String> = store.pending().into_iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec!["ORD-00001", "ORD-00003", "ORD-00004"]);
    }

    #[test]
    fn test_full_workflow() {
        let store = OrderStore::new();
        let id = create(&store).order_id;

        let order = store.transition(&id, OrderAction::Approve).unwrap();
        assert_eq!(order.status, OrderStatus::Approved);
        let order = store.transition(&id, OrderAction::Assign).unwrap();
        assert_eq!(order.status, OrderStatus::Assigned);

        let err = store.transition(&id, OrderAction::Assign).unwrap_err();
        assert_eq!(
            err,
            TransitionFailure::Rejected(TransitionError {
                from: OrderStatus::Assigned,
                action: OrderAction::Assign,
            })
        );

        let order = store.transition(&id, OrderAction::Complete).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(store.get(&id).unwrap().status, OrderStatus::Completed);
    }

    #[test]
    fn test_reject_twice_fails() {
        let store = OrderStore::new();
        let id = create(&store).order_id;

        store.transition(&id, OrderAction::Reject).unwrap();
        assert!(matches!(
            store.transition(&id, OrderAction::Reject),
            Err(TransitionFailure::Rejected(_))
        ));
        assert_eq!(store.get(&id).unwrap().status, OrderStatus::Rejected);
    }

    #[test]
    fn test_transition_unknown_order() {
        let store = OrderStore::new();
        assert_eq!(
            store.transition("ORD-00042", OrderAction::Complete),
            Err(TransitionFailure::NotFound)
        );
    }

    #[test]
    fn test_matched_runner_is_frozen() {
        let store = OrderStore::new();
        let id = create(&store).order_id;

        store.transition(&id, OrderAction::Approve).unwrap();
        let order = store.get(&id).unwrap();
        assert_eq!(order.matched_runner.unwrap().position, GeoPoint::new(13.6288, 79.4192));
    }
}
