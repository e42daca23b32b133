//! Shared application state
//!
//! The stores and the routing client, created once at startup and handed
//! to every request handler through axum's `State` extractor.

use std::sync::Arc;

use waypoint_core::domain::runner::DEFAULT_FLEET;
use waypoint_routing::RouteProvider;

use crate::repository::{LocationStore, OrderStore, RunnerStore};

#[derive(Clone)]
pub struct AppState {
    pub runners: Arc<RunnerStore>,
    pub orders: Arc<OrderStore>,
    pub locations: Arc<LocationStore>,
    pub router: Arc<dyn RouteProvider>,
}

impl AppState {
    /// State around an existing runner store
    pub fn new(runners: Arc<RunnerStore>, router: Arc<dyn RouteProvider>) -> Self {
        Self {
            runners,
            orders: Arc::new(OrderStore::new()),
            locations: Arc::new(LocationStore::new(DEFAULT_FLEET[0].position)),
            router,
        }
    }
}
