//! User location bookkeeping types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The destination currently selected by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lon: f64,
    pub updated_at: DateTime<Utc>,
}

/// A named favorite location. Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedLocation {
    /// Case-insensitive name comparison used for saved-location identity
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// A map click recorded by the admin portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateClick {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_named_ignores_case() {
        let loc = SavedLocation {
            name: "Home".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            created_at: Utc::now(),
            updated_at: None,
        };
        assert!(loc.is_named("home"));
        assert!(loc.is_named("HOME"));
        assert!(!loc.is_named("work"));
    }

    #[test]
    fn test_updated_at_omitted_until_set() {
        let loc = SavedLocation {
            name: "Work".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            created_at: Utc::now(),
            updated_at: None,
        };
        let json = serde_json::to_value(&loc).unwrap();
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["latitude"], 1.0);
    }
}
