//! Waypoint server
//!
//! HTTP backend for runner tracking, nearest-runner matching, delivery
//! orders and route lookups. All state lives in memory.

pub mod api;
pub mod config;
pub mod repository;
pub mod service;
pub mod simulation;
pub mod state;
