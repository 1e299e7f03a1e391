//! Deterministic race core.
//!
//! Everything here is pure and replayable from a seed: the entities,
//! the per-frame update, winner detection, and the RNG that drives the
//! kinematics. Terminal I/O and timing live in the other crates.

pub mod race;
pub mod rng;

pub use race::{lane_row, ConfigurationError, RaceOutcome, RaceState, Tortoise};
pub use rng::SimpleRng;
