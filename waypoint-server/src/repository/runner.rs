//! Runner Repository
//!
//! In-memory store owning every runner's position and history. The movement
//! simulator is the only writer; API queries read snapshots.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use waypoint_core::domain::runner::{
    DEFAULT_FLEET, HISTORY_CAPACITY, HISTORY_READ_LIMIT, NearestRunner, Runner, RunnerSeed,
    RunnerStatus,
};
use waypoint_core::geo::GeoPoint;

/// Runner store guarded by a single lock
#[derive(Debug, Default)]
pub struct RunnerStore {
    runners: RwLock<Vec<RunnerRecord>>,
}

impl RunnerStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the default fleet
    pub fn seeded() -> Self {
        Self::from_seeds(&DEFAULT_FLEET)
    }

    /// Store loaded with `seeds`, in order. Iteration order is seed order.
    pub fn from_seeds(seeds: &[RunnerSeed]) -> Self {
        let now = Utc::now();
        let runners = seeds
            .iter()
            .map(|seed| RunnerRecord::new(seed, now))
            .collect();

        Self {
            runners: RwLock::new(runners),
        }
    }

    /// All runners, each with at most the last 50 history points
    pub fn list_runners(&self) -> Vec<Runner> {
        let runners = self.runners.read().unwrap_or_else(PoisonError::into_inner);
        runners.iter().map(RunnerRecord::snapshot).collect()
    }

    /// Runner by id
    pub fn get_runner(&self, id: u32) -> Option<Runner> {
        let runners = self.runners.read().unwrap_or_else(PoisonError::into_inner);
        runners.iter().find(|r| r.id == id).map(RunnerRecord::snapshot)
    }

    /// Overwrite a runner's position and append it to the history.
    ///
    /// Returns `false` without touching anything when `id` is unknown.
    pub fn update_position(&self, id: u32, lat: f64, lon: f64) -> bool {
        let mut runners = self.runners.write().unwrap_or_else(PoisonError::into_inner);

        match runners.iter_mut().find(|r| r.id == id) {
            Some(runner) => {
                runner.move_to(GeoPoint::new(lat, lon), Utc::now());
                true
            }
            None => false,
        }
    }

    /// Closest runner to (`lat`, `lon`) by linear scan.
    ///
    /// Only a strictly smaller distance replaces the current best, so the
    /// earliest runner wins ties. `None` when the store is empty.
    pub fn find_nearest(&self, lat: f64, lon: f64) -> Option<NearestRunner> {
        let query = GeoPoint::new(lat, lon);
        let runners = self.runners.read().unwrap_or_else(PoisonError::into_inner);

        let mut best: Option<(&RunnerRecord, f64)> = None;
        for runner in runners.iter() {
            let distance = query.distance_km(runner.position);
            match best {
                Some((_, min)) if distance >= min => {}
                _ => best = Some((runner, distance)),
            }
        }

        best.map(|(runner, distance_km)| NearestRunner {
            runner: runner.snapshot(),
            distance_km,
        })
    }

    /// Current positions of every runner, in iteration order
    pub fn positions(&self) -> Vec<(u32, GeoPoint)> {
        let runners = self.runners.read().unwrap_or_else(PoisonError::into_inner);
        runners.iter().map(|r| (r.id, r.position)).collect()
    }

    /// Number of runners
    pub fn len(&self) -> usize {
        self.runners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full stored history of a runner (up to 100 points)
    #[cfg(test)]
    fn stored_history(&self, id: u32) -> Option<Vec<GeoPoint>> {
        let runners = self.runners.read().unwrap_or_else(PoisonError::into_inner);
        runners
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.history.iter().copied().collect())
    }
}

// =============================================================================
// Stored record
// =============================================================================

#[derive(Debug)]
struct RunnerRecord {
    id: u32,
    name: String,
    position: GeoPoint,
    status: RunnerStatus,
    history: VecDeque<GeoPoint>,
    updated_at: DateTime<Utc>,
}

impl RunnerRecord {
    fn new(seed: &RunnerSeed, now: DateTime<Utc>) -> Self {
        let mut history = VecDeque::with_capacity(HISTORY_CAPACITY);
        history.push_back(seed.position);

        Self {
            id: seed.id,
            name: seed.name.to_string(),
            position: seed.position,
            status: RunnerStatus::Active,
            history,
            updated_at: now,
        }
    }

    fn move_to(&mut self, position: GeoPoint, now: DateTime<Utc>) {
        self.position = position;
        self.history.push_back(position);
        while self.history.len() > HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.updated_at = now;
    }

    fn snapshot(&self) -> Runner {
        let skip = self.history.len().saturating_sub(HISTORY_READ_LIMIT);
        Runner {
            id: self.id,
            name: self.name.clone(),
            position: self.position,
            status: self.status,
            history: self.history.iter().skip(skip).copied().collect(),
            updated_at: self.updated_at,
        }
    }
}
