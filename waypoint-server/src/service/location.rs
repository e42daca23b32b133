//! Location Service
//!
//! Selected destination, saved favorites and click logging.

use thiserror::Error;
use waypoint_core::domain::location::{CoordinateClick, SavedLocation, UserLocation};
use waypoint_core::geo::{GeoPoint, InvalidCoordinates};

use crate::repository::LocationStore;

/// Service error type
#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    #[error("Location {0} not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, LocationError>;

/// Record a map click
pub fn log_click(store: &LocationStore, lat: f64, lng: f64) -> Result<CoordinateClick> {
    let position = GeoPoint::validated(lat, lng)?;
    tracing::debug!("Map click at {}", position);
    Ok(store.log_click(position))
}

/// Last clicks, oldest first
pub fn recent_clicks(store: &LocationStore) -> Vec<CoordinateClick> {
    store.recent_clicks()
}

/// Update the user's selected destination
pub fn set_user_location(store: &LocationStore, lat: f64, lng: f64) -> Result<UserLocation> {
    let position = GeoPoint::validated(lat, lng)?;
    tracing::info!("User location set to {}", position);
    Ok(store.set_selected(position))
}

pub fn user_location(store: &LocationStore) -> UserLocation {
    store.selected()
}

/// Save a favorite location, replacing one with the same name
pub fn save_location(
    store: &LocationStore,
    name: &str,
    lat: f64,
    lng: f64,
) -> Result<SavedLocation> {
    let position = GeoPoint::validated(lat, lng)?;
    let location = store.save(name, position);
    tracing::info!("Saved location '{}' at {}", location.name, position);
    Ok(location)
}

pub fn saved_locations(store: &LocationStore) -> Vec<SavedLocation> {
    store.saved()
}

/// Delete a favorite by name, ignoring case
pub fn delete_location(store: &LocationStore, name: &str) -> Result<()> {
    if !store.delete(name) {
        return Err(LocationError::NotFound(name.to_string()));
    }

    tracing::info!("Deleted saved location '{}'", name);
    Ok(())
}
