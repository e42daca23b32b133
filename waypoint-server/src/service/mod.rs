//! Service Module
//!
//! Business logic layer for the server.
//! Services validate input, call into the stores and translate store
//! results into domain errors. None of them hold a store lock across an
//! `.await`.

pub mod location;
pub mod order;
pub mod route;
pub mod runner;

// Re-export for convenience
pub use location as location_service;
pub use order as order_service;
pub use route as route_service;
pub use runner as runner_service;
