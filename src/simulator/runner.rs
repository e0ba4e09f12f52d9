//! Simulation runner: plays whole rounds through the real `Round`.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::ConfigError;
use crate::round::{GameInput, Round};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured round and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    config.game.validate()?;

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);
    let pilot = Autopilot::default();

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &pilot, &mut rng)?;
        tracing::debug!(run = run_idx + 1, score = stats.score, cause = ?stats.cause, "run finished");

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, {:.1}s, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.survival_time,
                stats
                    .cause
                    .map(|c| format!("{:?}", c))
                    .unwrap_or_else(|| "timed out".to_string())
            );
        }

        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// Play one round until it crashes or hits the time cap.
pub fn simulate_single_run<R: Rng>(
    config: &SimConfig,
    pilot: &Autopilot,
    rng: &mut R,
) -> Result<RunStats, ConfigError> {
    let mut round = Round::new(config.game.clone())?;
    let dt = config.game.physics_step;

    let mut flaps = 0;
    let mut pairs_spawned = 0;
    let mut cause = None;

    while round.elapsed() < config.max_time_per_run {
        if pilot.wants_flap(&round) {
            round.queue_input(GameInput::Flap);
        }

        let tick = round.tick(dt, rng);
        if tick.flapped {
            flaps += 1;
        }
        pairs_spawned += tick.pairs_spawned;

        if tick.game_over {
            cause = tick.collision;
            break;
        }
    }

    Ok(RunStats {
        score: round.score(),
        survival_time: round.elapsed(),
        cause,
        flaps,
        pairs_spawned,
    })
}
