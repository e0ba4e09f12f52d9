//! Scripted pilot used by the simulator.

use crate::round::Round;

/// Flaps whenever the flyer sinks below a trigger line inside the next gap.
///
/// A flap rises roughly `flap_force² / (2 · gravity)` before falling again,
/// so triggering near the bottom of the gap keeps the whole arc inside it.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Distance above the gap's lower edge at which to flap.
    pub trigger_margin: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            trigger_margin: 30.0,
        }
    }
}

impl Autopilot {
    /// Y below which the flyer should flap.
    pub fn trigger_line(&self, round: &Round) -> f64 {
        let flyer = round.flyer();
        let next_gap = round
            .obstacles()
            .pairs()
            .iter()
            .find(|p| p.trailing_edge() >= flyer.x - flyer.radius);

        match next_gap {
            Some(pair) => pair.gap_end() - self.trigger_margin,
            None => round.config().flyer_start_y,
        }
    }

    /// Whether to flap this tick. Only flaps while falling.
    pub fn wants_flap(&self, round: &Round) -> bool {
        let flyer = round.flyer();
        round.is_playing() && flyer.vel_y >= 0.0 && flyer.y > self.trigger_line(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_idles_at_start_height_without_pipes() {
        let round = Round::new(GameConfig::default()).unwrap();
        let pilot = Autopilot::default();
        assert!((pilot.trigger_line(&round) - 300.0).abs() < f64::EPSILON);
        assert!(!pilot.wants_flap(&round));
    }

    #[test]
    fn test_flaps_when_falling_below_gap() {
        let mut round = Round::new(GameConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        round.obstacles_mut().spawn_pair(&mut rng);
        let gap_end = round.obstacles().pairs()[0].gap_end();

        let pilot = Autopilot::default();
        round.flyer_mut().y = gap_end - 10.0;
        round.flyer_mut().vel_y = 20.0;
        assert!(pilot.wants_flap(&round));

        // Still rising from the last flap
        round.flyer_mut().vel_y = -100.0;
        assert!(!pilot.wants_flap(&round));
    }
}
