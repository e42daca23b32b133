//! Runner Service
//!
//! Runner lookups and nearest-runner queries.

use thiserror::Error;
use waypoint_core::domain::runner::{NearestRunner, Runner};
use waypoint_core::geo::{GeoPoint, InvalidCoordinates};

use crate::repository::RunnerStore;

/// Service error type
#[derive(Debug, Error, PartialEq)]
pub enum RunnerError {
    #[error("Runner {0} not found")]
    NotFound(u32),

    #[error("No runners available")]
    NoRunnersAvailable,

    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),
}

pub type Result<T> = std::result::Result<T, RunnerError>;

/// List all runners
pub fn list_runners(store: &RunnerStore) -> Vec<Runner> {
    store.list_runners()
}

/// Get a runner by ID
pub fn get_runner(store: &RunnerStore, id: u32) -> Result<Runner> {
    store.get_runner(id).ok_or(RunnerError::NotFound(id))
}

/// Find the runner closest to a user-supplied coordinate
pub fn find_nearest(store: &RunnerStore, lat: f64, lon: f64) -> Result<NearestRunner> {
    let query = GeoPoint::validated(lat, lon)?;

    let nearest = store
        .find_nearest(query.lat, query.lon)
        .ok_or(RunnerError::NoRunnersAvailable)?;

    tracing::debug!(
        "Nearest runner to {} is {} ({:.3} km)",
        query,
        nearest.runner.name,
        nearest.distance_km
    );

    Ok(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_runner_not_found() {
        let store = RunnerStore::seeded();
        assert_eq!(get_runner(&store, 42), Err(RunnerError::NotFound(42)));
        assert_eq!(get_runner(&store, 3).unwrap().name, "Charlie");
    }

    #[test]
    fn test_find_nearest_validates_coordinates() {
        let store = RunnerStore::seeded();
        assert_eq!(
            find_nearest(&store, 100.0, 0.0),
            Err(RunnerError::InvalidCoordinates(InvalidCoordinates))
        );
        assert_eq!(
            find_nearest(&store, 0.0, 200.0),
            Err(RunnerError::InvalidCoordinates(InvalidCoordinates))
        );
    }

    #[test]
    fn test_find_nearest_empty_store() {
        let store = RunnerStore::new();
        assert_eq!(
            find_nearest(&store, 13.6288, 79.4192),
            Err(RunnerError::NoRunnersAvailable)
        );
    }

    #[test]
    fn test_find_nearest_alice() {
        let store = RunnerStore::seeded();
        let nearest = find_nearest(&store, 13.6288, 79.4192).unwrap();
        assert_eq!(nearest.runner.name, "Alice");
        assert_eq!(nearest.distance_km, 0.0);
    }
}
