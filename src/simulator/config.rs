//! Simulation configuration.

use crate::core::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated seconds a round may last before it is cut off
    pub max_time_per_run: f64,

    /// World and physics settings every round uses
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_time_per_run: 300.0,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, seeded batch for a quick sanity check.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 50,
            seed: Some(seed),
            max_time_per_run: 60.0,
            ..Default::default()
        }
    }
}
