//! Runner domain model
//!
//! Represents a delivery runner whose position is tracked over time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Stored history is bounded to this many positions
pub const HISTORY_CAPACITY: usize = 100;

/// Snapshots expose at most this many of the most recent positions
pub const HISTORY_READ_LIMIT: usize = 50;

/// Point-in-time view of a runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Stable identifier assigned from the seed list
    pub id: u32,

    /// Display name
    pub name: String,

    /// Current position
    pub position: GeoPoint,

    /// Current status of the runner
    pub status: RunnerStatus,

    /// Most recent positions, oldest first
    pub history: Vec<GeoPoint>,

    /// Last time the position was written
    pub updated_at: DateTime<Utc>,
}

/// Status of a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerStatus {
    /// Runner is on shift and can be matched to orders
    Active,

    /// Runner is off shift
    Inactive,

    /// Runner is currently delivering
    Busy,
}

impl std::fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerStatus::Active => write!(f, "active"),
            RunnerStatus::Inactive => write!(f, "inactive"),
            RunnerStatus::Busy => write!(f, "busy"),
        }
    }
}

/// Closest runner to a query point
#[derive(Debug, Clone, PartialEq)]
pub struct NearestRunner {
    pub runner: Runner,
    pub distance_km: f64,
}

/// Entry of the fixed startup fleet
#[derive(Debug, Clone, Copy)]
pub struct RunnerSeed {
    pub id: u32,
    pub name: &'static str,
    pub position: GeoPoint,
}

/// Fleet loaded at process start
pub const DEFAULT_FLEET: [RunnerSeed; 5] = [
    RunnerSeed {
        id: 1,
        name: "Alice",
        position: GeoPoint::new(13.6288, 79.4192),
    },
    RunnerSeed {
        id: 2,
        name: "Bob",
        position: GeoPoint::new(13.6350, 79.4200),
    },
    RunnerSeed {
        id: 3,
        name: "Charlie",
        position: GeoPoint::new(13.6200, 79.4150),
    },
    RunnerSeed {
        id: 4,
        name: "Diana",
        position: GeoPoint::new(13.6400, 79.4300),
    },
    RunnerSeed {
        id: 5,
        name: "Eve",
        position: GeoPoint::new(13.6100, 79.4250),
    },
];
