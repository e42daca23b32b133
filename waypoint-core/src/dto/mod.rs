//! Data Transfer Objects for the HTTP API
//!
//! Wire representations of domain entities. The field names here are the
//! public contract relied upon by the admin and user portals.

pub mod health;
pub mod location;
pub mod order;
pub mod route;
pub mod runner;
