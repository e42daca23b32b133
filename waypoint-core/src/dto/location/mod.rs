//! Location bookkeeping DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::location::{CoordinateClick, SavedLocation, UserLocation};

/// Query parameters carrying a single coordinate (`?lat=&lng=`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Body of a selected-location update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of a save-favorite request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Selected location as returned by `GET /api/user/location`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<UserLocation> for UserLocationResponse {
    fn from(location: UserLocation) -> Self {
        UserLocationResponse {
            latitude: location.lat,
            longitude: location.lon,
            updated_at: location.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickLogged {
    pub success: bool,
    pub log: CoordinateClick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickLog {
    pub coordinates: Vec<CoordinateClick>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocationUpdated {
    pub success: bool,
    pub location: UserLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSaved {
    pub success: bool,
    pub location: SavedLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDeleted {
    pub success: bool,
    pub message: String,
}
