//! Repository Module
//!
//! Data access layer for the server.
//! Each repository is an in-memory store owning one kind of entity. Stores
//! are constructed once at startup and shared through `AppState`.

pub mod location;
pub mod order;
pub mod runner;

pub use location::LocationStore;
pub use order::OrderStore;
pub use runner::RunnerStore;
