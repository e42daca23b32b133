//! Core domain types
//!
//! This module contains the business entities shared by the routing client
//! and the server: runners, delivery orders, user locations and routes.

pub mod location;
pub mod order;
pub mod route;
pub mod runner;
