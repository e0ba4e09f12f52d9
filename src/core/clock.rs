//! Simulation time: frame-relative countdowns and the fixed-step frame clock.
//!
//! Every in-game timer is a `Countdown` fed by the same Δt as the physics,
//! so stopping the tick source stops all of them together.

use std::time::Duration;

/// A timer that counts down by the Δt it is fed.
///
/// Used one-shot (restart delay) via [`Countdown::tick`] or repeating
/// (spawn cadence) via [`Countdown::tick_repeating`]. A paused countdown
/// ignores Δt entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    duration: f64,
    remaining: f64,
    paused: bool,
}

impl Countdown {
    /// A running countdown with a full `duration` remaining.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            remaining: duration,
            paused: false,
        }
    }

    /// Reload to a full duration and unpause.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f64 {
        self.remaining.max(0.0)
    }

    /// One-shot advance. Returns true only on the tick that expires it.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.paused || self.is_expired() {
            return false;
        }
        self.remaining -= dt;
        self.is_expired()
    }

    /// Repeating advance. Returns how many times the countdown fired during
    /// this Δt; overflow carries into the next period.
    pub fn tick_repeating(&mut self, dt: f64) -> u32 {
        if self.paused || self.duration <= 0.0 {
            return 0;
        }
        self.remaining -= dt;
        let mut fired = 0;
        while self.remaining <= 0.0 {
            self.remaining += self.duration;
            fired += 1;
        }
        fired
    }
}

/// Converts wall-clock frame time into a whole number of fixed Δt steps.
///
/// Real frames are clamped to `max_frame_dt` so a stalled terminal does not
/// fast-forward the simulation; the remainder below one step is carried.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f64,
    max_frame_dt: f64,
    accumulated: f64,
}

impl FrameClock {
    pub fn new(step: f64, max_frame_dt: f64) -> Self {
        Self {
            step,
            max_frame_dt,
            accumulated: 0.0,
        }
    }

    /// Fixed Δt each step represents, in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Feed real elapsed time; returns how many steps to simulate now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let dt = elapsed.as_secs_f64().min(self.max_frame_dt);
        self.accumulated += dt;

        let mut steps = 0;
        while self.accumulated >= self.step {
            self.accumulated -= self.step;
            steps += 1;
        }
        steps
    }
}
