//! Waypoint Routing
//!
//! Driving-route lookups against an external routing service.
//!
//! The server depends only on the [`RouteProvider`] trait; [`OsrmClient`] is
//! the production implementation backed by an OSRM HTTP endpoint.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use waypoint_core::geo::GeoPoint;
//! use waypoint_routing::{OsrmClient, RouteProvider};
//!
//! # async fn example() -> waypoint_routing::Result<()> {
//! let client = OsrmClient::new("https://router.project-osrm.org", Duration::from_secs(10))?;
//! let route = client
//!     .route(GeoPoint::new(13.6288, 79.4192), GeoPoint::new(13.6400, 79.4300))
//!     .await?;
//! println!("{:.2} km", route.distance_km);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod osrm;

pub use error::{Result, RoutingError};
pub use osrm::{DEFAULT_OSRM_URL, OsrmClient};

use async_trait::async_trait;
use waypoint_core::domain::route::RouteInfo;
use waypoint_core::geo::GeoPoint;

/// Computes driving routes between two coordinates
///
/// Coordinates are range-checked by the caller before invocation.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Route from `start` to `end`
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RouteInfo>;
}
