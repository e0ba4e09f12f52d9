//! The round context and its tick function.

use super::types::*;
use crate::collision::{self, Collision, Rect};
use crate::core::{ConfigError, Countdown, GameConfig};
use crate::flyer::Flyer;
use crate::obstacles::ObstacleManager;
use rand::Rng;

/// One round's worth of state: the flyer, the live pipes, the score and
/// the lifecycle. Reset in place on restart.
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    flyer: Flyer,
    obstacles: ObstacleManager,
    ground: Rect,

    state: RoundState,
    score: u32,
    can_restart: bool,
    restart_delay: Countdown,

    // Input latches, consumed by the next tick
    flap_queued: bool,
    restart_queued: bool,

    /// Seconds spent in Playing this round.
    elapsed: f64,
    /// 1 for the first round, +1 per restart.
    round_number: u32,
}

impl Round {
    /// Start the first round. Fails if the config could produce a
    /// degenerate world.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ground = Rect::new(
            0.0,
            config.ground_top(),
            config.world_width,
            config.ground_height,
        );

        Ok(Self {
            flyer: Flyer::new(&config),
            obstacles: ObstacleManager::new(&config),
            ground,
            state: RoundState::Playing,
            score: 0,
            can_restart: false,
            restart_delay: Countdown::new(config.restart_delay),
            flap_queued: false,
            restart_queued: false,
            elapsed: 0.0,
            round_number: 1,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    #[cfg(test)]
    pub(crate) fn flyer_mut(&mut self) -> &mut Flyer {
        &mut self.flyer
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut ObstacleManager {
        &mut self.obstacles
    }

    pub fn ground(&self) -> &Rect {
        &self.ground
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == RoundState::Playing
    }

    /// Pairs passed this round.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn can_restart(&self) -> bool {
        self.can_restart
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Latch an input for the next tick. Repeated inputs within one tick
    /// collapse into one.
    pub fn queue_input(&mut self, input: GameInput) {
        match input {
            GameInput::Flap => self.flap_queued = true,
            GameInput::Restart => self.restart_queued = true,
        }
    }

    /// Advance the round by `dt` seconds.
    ///
    /// Order within a Playing tick: queued flap, gravity, ceiling clamp,
    /// pipe movement and spawning, pipe collision, ground collision, then
    /// scoring. A collision ends the tick before any scoring.
    pub fn tick<R: Rng>(&mut self, dt: f64, rng: &mut R) -> TickResult {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let flap = std::mem::take(&mut self.flap_queued);
        let restart = std::mem::take(&mut self.restart_queued);

        match self.state {
            RoundState::Playing => self.tick_playing(dt, flap, restart, rng),
            RoundState::GameOver => self.tick_game_over(dt, flap, restart),
        }
    }

    fn tick_playing<R: Rng>(
        &mut self,
        dt: f64,
        flap: bool,
        restart: bool,
        rng: &mut R,
    ) -> TickResult {
        let mut result = TickResult::default();

        if restart {
            tracing::debug!("restart ignored: round still in play");
        }

        if flap {
            result.flapped = self.flyer.flap(self.config.flap_force);
        }

        self.flyer.integrate(self.config.gravity, dt);
        self.flyer.clamp_to_ceiling();

        result.pairs_retired = self.obstacles.advance_all(dt);
        result.pairs_spawned = self.obstacles.tick_cadence(dt, rng);
        self.elapsed += dt;

        let hit = collision::test_obstacle_collision(&self.flyer, self.obstacles.pairs())
            .or_else(|| collision::test_ground_collision(&self.flyer, &self.ground));
        if let Some(hit) = hit {
            self.enter_game_over(hit);
            result.collision = Some(hit);
            result.game_over = true;
            return result;
        }

        let passed = collision::update_passage(&self.flyer, self.obstacles.pairs_mut());
        if passed > 0 {
            self.score += passed;
            tracing::trace!(score = self.score, "passed pipe pair");
        }
        result.pairs_passed = passed;

        result
    }

    fn tick_game_over(&mut self, dt: f64, flap: bool, restart: bool) -> TickResult {
        let mut result = TickResult::default();

        if flap {
            tracing::debug!("flap ignored: round is over");
        }

        if restart {
            if self.can_restart {
                self.reset();
                result.restarted = true;
                return result;
            }
            tracing::debug!(
                remaining = self.restart_delay.remaining(),
                "restart ignored: delay not elapsed"
            );
        }

        self.flyer.clamp_to_ceiling();

        if self.restart_delay.tick(dt) {
            self.can_restart = true;
            result.restart_unlocked = true;
        }

        result
    }

    /// Playing -> GameOver. Runs exactly once per round: the flyer is dead
    /// afterwards, so neither collision test can fire again.
    fn enter_game_over(&mut self, cause: Collision) {
        self.flyer.alive = false;
        self.state = RoundState::GameOver;
        self.obstacles.suspend_cadence();
        self.obstacles.clear();
        self.restart_delay.reset();
        self.can_restart = self.restart_delay.is_expired();

        tracing::info!(
            round = self.round_number,
            score = self.score,
            elapsed = self.elapsed,
            ?cause,
            "round over"
        );
    }

    /// GameOver -> Playing with everything back at its initial value.
    fn reset(&mut self) {
        self.flyer = Flyer::new(&self.config);
        self.obstacles.clear();
        self.obstacles.restart_cadence();
        self.score = 0;
        self.can_restart = false;
        self.state = RoundState::Playing;
        self.elapsed = 0.0;
        self.round_number += 1;

        tracing::info!(round = self.round_number, "round restarted");
    }

    /// Current state for the render adapter.
    pub fn snapshot(&self) -> Snapshot {
        let obstacles = self
            .obstacles
            .pairs()
            .iter()
            .flat_map(|pair| {
                pair.rects().map(|(segment, rect)| ObstacleView {
                    segment,
                    rect,
                    passed: pair.passed,
                })
            })
            .collect();

        Snapshot {
            flyer: FlyerView {
                x: self.flyer.x,
                y: self.flyer.y,
                vel_y: self.flyer.vel_y,
                radius: self.flyer.radius,
                visible: self.flyer.alive,
            },
            obstacles,
            ground: self.ground,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            score: self.score,
            state: self.state,
            can_restart: self.can_restart,
        }
    }
}
