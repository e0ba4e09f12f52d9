//! The player-controlled flyer: gravity integration and flap response.
//!
//! Y grows downward (row 0 is the ceiling), so gravity increases `vel_y`
//! and a flap sets it negative.

use crate::collision::Rect;
use crate::core::GameConfig;

/// Flyer state. `x`/`y` are the center of its bounding circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in units/second (positive = downward).
    pub vel_y: f64,
    pub alive: bool,
    pub radius: f64,
}

impl Flyer {
    /// A fresh flyer at the configured start position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.flyer_start_x,
            y: config.flyer_start_y,
            vel_y: 0.0,
            alive: true,
            radius: config.flyer_radius(),
        }
    }

    /// Semi-implicit Euler step: velocity first, then position.
    pub fn integrate(&mut self, gravity: f64, dt: f64) {
        self.vel_y += gravity * dt;
        self.y += self.vel_y * dt;
    }

    /// Set (not add) an upward velocity. Ignored once the flyer is dead.
    pub fn flap(&mut self, flap_force: f64) -> bool {
        if !self.alive {
            return false;
        }
        self.vel_y = -flap_force;
        true
    }

    /// Keep the flyer from leaving through the top of the world.
    pub fn clamp_to_ceiling(&mut self) -> bool {
        if self.y < 0.0 {
            self.y = 0.0;
            self.vel_y = 0.0;
            return true;
        }
        false
    }

    /// Axis-aligned box enclosing the bounding circle.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn flyer() -> Flyer {
        Flyer::new(&GameConfig::default())
    }

    #[test]
    fn test_new_flyer_defaults() {
        let f = flyer();
        assert!((f.x - 120.0).abs() < f64::EPSILON);
        assert!((f.y - 300.0).abs() < f64::EPSILON);
        assert_eq!(f.vel_y, 0.0);
        assert!(f.alive);
        assert!((f.radius - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_step_matches_reference() {
        let mut f = flyer();
        f.integrate(320.0, DT);
        assert!((f.vel_y - 5.3333).abs() < 1e-3);
        assert!((f.y - 300.0889).abs() < 1e-3);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut f = flyer();
        f.vel_y = 500.0;
        assert!(f.flap(240.0));
        assert_eq!(f.vel_y, -240.0);
        assert!(f.flap(240.0));
        assert_eq!(f.vel_y, -240.0);
    }

    #[test]
    fn test_dead_flyer_cannot_flap() {
        let mut f = flyer();
        f.alive = false;
        f.vel_y = 12.0;
        assert!(!f.flap(240.0));
        assert_eq!(f.vel_y, 12.0);
    }

    #[test]
    fn test_clamp_zeroes_position_and_velocity() {
        let mut f = flyer();
        f.y = -3.5;
        f.vel_y = -900.0;
        assert!(f.clamp_to_ceiling());
        assert_eq!(f.y, 0.0);
        assert_eq!(f.vel_y, 0.0);
    }

    #[test]
    fn test_clamp_leaves_inbounds_flyer_alone() {
        let mut f = flyer();
        f.vel_y = -50.0;
        assert!(!f.clamp_to_ceiling());
        assert_eq!(f.vel_y, -50.0);
    }

    #[test]
    fn test_bounds_encloses_circle() {
        let f = flyer();
        let b = f.bounds();
        assert!((b.x - 104.0).abs() < f64::EPSILON);
        assert!((b.y - 284.0).abs() < f64::EPSILON);
        assert!((b.w - 32.0).abs() < f64::EPSILON);
        assert!((b.h - 32.0).abs() < f64::EPSILON);
    }
}
