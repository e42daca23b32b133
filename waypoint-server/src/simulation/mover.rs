//! Runner mover
//!
//! Jitters every runner's position on a fixed period. A failed tick is
//! logged and the loop carries on with the next one.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error, info};
use waypoint_core::geo::{GeoPoint, InvalidCoordinates};

use crate::repository::RunnerStore;

/// A tick that could not move every runner
#[derive(Debug, Error, PartialEq)]
pub enum TickError {
    #[error("runners {skipped:?} would leave the valid coordinate range ({moved} moved)")]
    OutOfRange { skipped: Vec<u32>, moved: usize },
}

/// Offset `position` by (`d_lat`, `d_lon`) degrees, refusing to leave the
/// valid coordinate range
pub fn jittered(
    position: GeoPoint,
    d_lat: f64,
    d_lon: f64,
) -> Result<GeoPoint, InvalidCoordinates> {
    GeoPoint::validated(position.lat + d_lat, position.lon + d_lon)
}

/// Moves runners around at random
pub struct RunnerMover {
    store: Arc<RunnerStore>,
    interval: Duration,
    /// Maximum offset per axis, in degrees
    jitter: f64,
    rng: StdRng,
}

impl RunnerMover {
    /// Creates a mover seeded from OS entropy
    pub fn new(store: Arc<RunnerStore>, interval: Duration, jitter: f64) -> Self {
        Self {
            store,
            interval,
            jitter,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source with a deterministic one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Moves every runner once. Runners whose new position would be out of
    /// range stay where they are and are reported in the error.
    pub fn tick(&mut self) -> Result<usize, TickError> {
        let mut moved = 0;
        let mut skipped = Vec::new();

        for (id, position) in self.store.positions() {
            let d_lat = self.rng.gen_range(-self.jitter..=self.jitter);
            let d_lon = self.rng.gen_range(-self.jitter..=self.jitter);

            match jittered(position, d_lat, d_lon) {
                Ok(next) => {
                    if self.store.update_position(id, next.lat, next.lon) {
                        moved += 1;
                    }
                }
                Err(_) => skipped.push(id),
            }
        }

        if skipped.is_empty() {
            Ok(moved)
        } else {
            Err(TickError::OutOfRange { skipped, moved })
        }
    }

    /// Runs until `shutdown` flips to `true` or its sender is dropped
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Starting runner simulation (interval: {:?}, jitter: {})",
            self.interval, self.jitter
        );

        let mut ticker = time::interval(self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match std::panic::catch_unwind(AssertUnwindSafe(|| self.tick())) {
                        Ok(Ok(moved)) => debug!("Runner positions updated ({} moved)", moved),
                        Ok(Err(e)) => error!("Error in runner simulation: {}", e),
                        Err(_) => error!("Runner simulation tick panicked"),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Runner simulation stopped");
    }

    /// Spawns the loop on the runtime and returns a handle to stop it
    pub fn spawn(self) -> SimulationHandle {
        let (shutdown, receiver) = watch::channel(false);
        let task = tokio::spawn(self.run(receiver));

        SimulationHandle { shutdown, task }
    }
}

/// Handle to the running simulation task
pub struct SimulationHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SimulationHandle {
    /// Signals the loop to stop and waits for it to finish
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        // The receiver only disappears if the task already ended
        let _ = self.shutdown.send(true);
        self.task.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::domain::runner::RunnerSeed;

    const JITTER: f64 = 0.0005;

    #[test]
    fn test_jittered_bounds() {
        assert_eq!(
            jittered(GeoPoint::new(10.0, 20.0), 0.0005, -0.0005),
            Ok(GeoPoint::new(10.0 + 0.0005, 20.0 - 0.0005))
        );
        assert!(jittered(GeoPoint::new(90.0, 0.0), 0.0001, 0.0).is_err());
        assert!(jittered(GeoPoint::new(0.0, -180.0), 0.0, -0.0001).is_err());
    }

    #[test]
    fn test_tick_moves_every_runner_within_jitter() {
        let store = Arc::new(RunnerStore::seeded());
        let before = store.positions();
        let mut mover = RunnerMover::new(Arc::clone(&store), Duration::from_secs(3), JITTER)
            .with_seed(7);

        assert_eq!(mover.tick(), Ok(5));

        for ((id, old), (_, new)) in before.iter().zip(store.positions()) {
            assert!((new.lat - old.lat).abs() <= JITTER + 1e-12, "runner {id}");
            assert!((new.lon - old.lon).abs() <= JITTER + 1e-12, "runner {id}");
            assert_eq!(store.get_runner(*id).unwrap().history.len(), 2);
        }
    }

    #[test]
    fn test_tick_on_empty_store() {
        let store = Arc::new(RunnerStore::new());
        let mut mover = RunnerMover::new(store, Duration::from_secs(3), JITTER).with_seed(1);
        assert_eq!(mover.tick(), Ok(0));
    }

    #[test]
    fn test_tick_reports_out_of_range_and_keeps_positions_valid() {
        let store = Arc::new(RunnerStore::from_seeds(&[RunnerSeed {
            id: 9,
            name: "Edge",
            position: GeoPoint::new(89.0, 179.0),
        }]));
        let mut mover = RunnerMover::new(Arc::clone(&store), Duration::from_secs(3), 50.0)
            .with_seed(42);

        let mut failures = 0;
        for _ in 0..50 {
            if let Err(TickError::OutOfRange { skipped, moved }) = mover.tick() {
                assert_eq!(skipped, vec![9]);
                assert_eq!(moved, 0);
                failures += 1;
            }
            let position = store.get_runner(9).unwrap().position;
            assert!(waypoint_core::geo::is_valid(position.lat, position.lon));
        }
        assert!(failures > 0);
    }

    #[tokio::test]
    async fn test_spawned_loop_moves_runners_and_stops() {
        let store = Arc::new(RunnerStore::seeded());
        let handle = RunnerMover::new(Arc::clone(&store), Duration::from_millis(10), JITTER)
            .with_seed(3)
            .spawn();

        time::sleep(Duration::from_millis(80)).await;
        handle.shutdown().await.unwrap();

        let history = store.get_runner(1).unwrap().history.len();
        assert!(history > 1, "history length {history}");

        // No further movement after shutdown
        time::sleep(Duration::from_millis(30)).await;
        assert_eq!(store.get_runner(1).unwrap().history.len(), history);
    }
}
