//! Waypoint Core
//!
//! Core types for the Waypoint runner tracking and delivery system.
//!
//! This crate contains:
//! - Geo: Haversine distance and coordinate validation
//! - Domain types: Runners, delivery orders and their state machine, locations
//! - DTOs: The JSON shapes of the HTTP API

pub mod domain;
pub mod dto;
pub mod geo;
