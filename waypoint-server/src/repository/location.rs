//! Location Repository
//!
//! Selected destination, saved favorites and the map click log.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use waypoint_core::domain::location::{CoordinateClick, SavedLocation, UserLocation};
use waypoint_core::geo::GeoPoint;

/// Clicks kept in memory
pub const CLICK_LOG_CAPACITY: usize = 100;

/// Clicks returned by a read
pub const CLICK_LOG_READ_LIMIT: usize = 20;

#[derive(Debug)]
struct LocationState {
    selected: UserLocation,
    saved: Vec<SavedLocation>,
    clicks: VecDeque<CoordinateClick>,
}

#[derive(Debug)]
pub struct LocationStore {
    state: Mutex<LocationState>,
}

impl LocationStore {
    /// Store whose selected location starts at `initial`
    pub fn new(initial: GeoPoint) -> Self {
        Self {
            state: Mutex::new(LocationState {
                selected: UserLocation {
                    lat: initial.lat,
                    lon: initial.lon,
                    updated_at: Utc::now(),
                },
                saved: Vec::new(),
                clicks: VecDeque::with_capacity(CLICK_LOG_CAPACITY),
            }),
        }
    }

    pub fn selected(&self) -> UserLocation {
        self.lock().selected.clone()
    }

    pub fn set_selected(&self, position: GeoPoint) -> UserLocation {
        let mut state = self.lock();
        state.selected = UserLocation {
            lat: position.lat,
            lon: position.lon,
            updated_at: Utc::now(),
        };
        state.selected.clone()
    }

    /// Save a favorite. An existing entry with the same name (ignoring
    /// case) keeps its name and creation time and gets the new coordinates.
    pub fn save(&self, name: &str, position: GeoPoint) -> SavedLocation {
        let now = Utc::now();
        let mut state = self.lock();

        if let Some(existing) = state.saved.iter_mut().find(|l| l.is_named(name)) {
            existing.latitude = position.lat;
            existing.longitude = position.lon;
            existing.updated_at = Some(now);
            return existing.clone();
        }

        let location = SavedLocation {
            name: name.to_string(),
            latitude: position.lat,
            longitude: position.lon,
            created_at: now,
            updated_at: None,
        };
        state.saved.push(location.clone());
        location
    }

    /// Saved favorites in insertion order
    pub fn saved(&self) -> Vec<SavedLocation> {
        self.lock().saved.clone()
    }

    /// Remove the favorite named `name` (ignoring case). Returns whether
    /// anything was removed.
    pub fn delete(&self, name: &str) -> bool {
        let mut state = self.lock();
        let before = state.saved.len();
        state.saved.retain(|l| !l.is_named(name));
        state.saved.len() < before
    }

    /// Record a map click, dropping the oldest beyond the capacity
    pub fn log_click(&self, position: GeoPoint) -> CoordinateClick {
        let click = CoordinateClick {
            latitude: position.lat,
            longitude: position.lon,
            timestamp: Utc::now(),
        };

        let mut state = self.lock();
        state.clicks.push_back(click.clone());
        while state.clicks.len() > CLICK_LOG_CAPACITY {
            state.clicks.pop_front();
        }
        click
    }

    /// The most recent clicks, oldest first
    pub fn recent_clicks(&self) -> Vec<CoordinateClick> {
        let state = self.lock();
        let skip = state.clicks.len().saturating_sub(CLICK_LOG_READ_LIMIT);
        state.clicks.iter().skip(skip).cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LocationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
