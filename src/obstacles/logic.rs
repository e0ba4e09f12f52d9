//! Obstacle manager: owns the live pipe pairs and the spawn cadence.

use super::types::PipePair;
use crate::core::{Countdown, GameConfig};
use rand::Rng;

/// Live pipe pairs, ordered oldest (leftmost) first.
#[derive(Debug, Clone)]
pub struct ObstacleManager {
    pairs: Vec<PipePair>,
    cadence: Countdown,

    // Cached config
    spawn_x: f64,
    pipe_width: f64,
    pipe_gap: f64,
    pipe_speed: f64,
    ground_top: f64,
    gap_start_range: (f64, f64),
}

impl ObstacleManager {
    /// Empty manager with a full spawn interval ahead. `config` must
    /// already be validated.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pairs: Vec::new(),
            cadence: Countdown::new(config.spawn_interval),
            spawn_x: config.world_width,
            pipe_width: config.pipe_width,
            pipe_gap: config.pipe_gap,
            pipe_speed: config.pipe_speed,
            ground_top: config.ground_top(),
            gap_start_range: config.gap_start_range(),
        }
    }

    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    pub(crate) fn pairs_mut(&mut self) -> &mut [PipePair] {
        &mut self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sample a gap start from the closed legal range.
    pub fn sample_gap_start<R: Rng>(&self, rng: &mut R) -> f64 {
        let (min, max) = self.gap_start_range;
        rng.gen_range(min..=max)
    }

    /// Add a new pair at the right edge of the world.
    pub fn spawn_pair<R: Rng>(&mut self, rng: &mut R) -> &PipePair {
        let gap_start = self.sample_gap_start(rng);
        let bottom_height = self.ground_top - gap_start - self.pipe_gap;

        tracing::debug!(gap_start, live = self.pairs.len() + 1, "spawned pipe pair");

        self.pairs.push(PipePair {
            x: self.spawn_x,
            width: self.pipe_width,
            gap_start,
            gap_height: self.pipe_gap,
            bottom_height,
            speed: self.pipe_speed,
            passed: false,
        });
        &self.pairs[self.pairs.len() - 1]
    }

    /// Move every pair left and drop those that are fully off-screen.
    /// Returns the number of pairs retired.
    pub fn advance_all(&mut self, dt: f64) -> usize {
        for pair in &mut self.pairs {
            pair.x -= pair.speed * dt;
        }

        let before = self.pairs.len();
        self.pairs.retain(|p| p.x >= -p.width);
        let retired = before - self.pairs.len();
        if retired > 0 {
            tracing::trace!(retired, live = self.pairs.len(), "retired pipe pairs");
        }
        retired
    }

    /// Run the spawn cadence for one tick. Returns the number of pairs spawned.
    pub fn tick_cadence<R: Rng>(&mut self, dt: f64, rng: &mut R) -> u32 {
        let due = self.cadence.tick_repeating(dt);
        for _ in 0..due {
            self.spawn_pair(rng);
        }
        due
    }

    /// Freeze the cadence where it is.
    pub fn suspend_cadence(&mut self) {
        self.cadence.pause();
    }

    /// Start a fresh, full spawn interval.
    pub fn restart_cadence(&mut self) {
        self.cadence.reset();
    }

    pub fn cadence(&self) -> &Countdown {
        &self.cadence
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f64 = 1.0 / 60.0;

    fn manager() -> ObstacleManager {
        ObstacleManager::new(&GameConfig::default())
    }

    #[test]
    fn test_spawn_pair_at_right_edge() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pair = obstacles.spawn_pair(&mut rng).clone();

        assert!((pair.x - 800.0).abs() < f64::EPSILON);
        assert!(!pair.passed);
        assert!((pair.gap_height - 180.0).abs() < f64::EPSILON);
        // top + gap + bottom == world height - ground height
        let total = pair.gap_start + pair.gap_height + pair.bottom_height;
        assert!((total - 488.0).abs() < 1e-9);
        assert_eq!(obstacles.pairs().len(), 1);
    }

    #[test]
    fn test_gap_start_always_in_range() {
        let obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let gap_start = obstacles.sample_gap_start(&mut rng);
            assert!((180.0..=308.0).contains(&gap_start), "{gap_start}");
        }
    }

    #[test]
    fn test_advance_moves_left() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        obstacles.spawn_pair(&mut rng);
        obstacles.pairs_mut()[0].x = 60.0;

        obstacles.advance_all(DT);
        assert!((obstacles.pairs()[0].x - 57.3333).abs() < 1e-3);
    }

    #[test]
    fn test_pair_retired_once_off_screen() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        obstacles.spawn_pair(&mut rng);
        obstacles.pairs_mut()[0].x = 60.0;

        let mut ticks = 0;
        while !obstacles.is_empty() {
            obstacles.advance_all(DT);
            ticks += 1;
            assert!(ticks < 100, "pair never retired");
        }
        // 120 units at 160/s is 45 ticks; rounding decides whether the
        // boundary tick itself or the next one retires it
        assert!((45..=46).contains(&ticks), "{ticks}");
    }

    #[test]
    fn test_cadence_waits_full_interval() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(obstacles.tick_cadence(2.4, &mut rng), 0);
        assert!(obstacles.is_empty());
        assert_eq!(obstacles.tick_cadence(0.2, &mut rng), 1);
        assert_eq!(obstacles.pairs().len(), 1);
    }

    #[test]
    fn test_suspended_cadence_never_spawns() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        obstacles.tick_cadence(2.0, &mut rng);
        obstacles.suspend_cadence();
        assert_eq!(obstacles.tick_cadence(100.0, &mut rng), 0);

        obstacles.restart_cadence();
        assert!((obstacles.cadence().remaining() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut obstacles = manager();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        obstacles.spawn_pair(&mut rng);
        obstacles.spawn_pair(&mut rng);
        obstacles.clear();
        assert!(obstacles.is_empty());
    }
}
