//! Headless round simulator for Monte Carlo analysis.
//!
//! Plays many seeded rounds with a scripted autopilot to measure:
//! - Score and survival time distributions
//! - How often rounds end on a pipe versus the ground
//! - Whether a config change makes the game harder or easier
//!
//! Uses `Round` directly, so results match real gameplay exactly.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
