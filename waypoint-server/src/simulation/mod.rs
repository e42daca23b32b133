//! Simulation layer
//!
//! Background movement of runners. The mover is the only writer of runner
//! positions; it runs as a managed task that is stopped on shutdown.

pub mod mover;

pub use mover::{RunnerMover, SimulationHandle};
