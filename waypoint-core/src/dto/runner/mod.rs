//! Runner DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::runner::{NearestRunner, Runner, RunnerStatus};

/// Runner as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSnapshot {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub status: RunnerStatus,

    /// Recent positions as `[lat, lon]` pairs, oldest first
    pub history: Vec<[f64; 2]>,

    pub updated_at: DateTime<Utc>,
}

impl From<Runner> for RunnerSnapshot {
    fn from(runner: Runner) -> Self {
        RunnerSnapshot {
            id: runner.id,
            name: runner.name,
            lat: runner.position.lat,
            lon: runner.position.lon,
            status: runner.status,
            history: runner.history.into_iter().map(|p| p.as_pair()).collect(),
            updated_at: runner.updated_at,
        }
    }
}

/// Query parameters for a nearest-runner lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestRunnerQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Closest runner and its distance, rounded to 2 decimals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestRunnerResponse {
    pub runner: RunnerSnapshot,
    pub distance_km: f64,
}

impl From<NearestRunner> for NearestRunnerResponse {
    fn from(nearest: NearestRunner) -> Self {
        NearestRunnerResponse {
            runner: nearest.runner.into(),
            distance_km: crate::geo::round_to(nearest.distance_km, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    #[test]
    fn test_snapshot_flattens_position_and_history() {
        let runner = Runner {
            id: 7,
            name: "Grace".to_string(),
            position: GeoPoint::new(1.5, 2.5),
            status: RunnerStatus::Active,
            history: vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(1.5, 2.5)],
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(RunnerSnapshot::from(runner)).unwrap();
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["lon"], 2.5);
        assert_eq!(json["status"], "active");
        assert_eq!(json["history"][0], serde_json::json!([1.0, 2.0]));
    }
}
