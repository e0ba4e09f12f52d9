//! Collision tests and pass-through scoring.
//!
//! Everything here is polled once per tick by the round, in a fixed order,
//! instead of being fired as callbacks.

use crate::flyer::Flyer;
use crate::obstacles::{PipePair, Segment};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// What the flyer hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Pipe(Segment),
    Ground,
}

/// First pipe segment the flyer overlaps, if any. Dead flyers never collide.
pub fn test_obstacle_collision(flyer: &Flyer, pairs: &[PipePair]) -> Option<Collision> {
    if !flyer.alive {
        return None;
    }
    let bounds = flyer.bounds();
    pairs
        .iter()
        .flat_map(|pair| pair.rects())
        .find(|(_, rect)| bounds.overlaps(rect))
        .map(|(segment, _)| Collision::Pipe(segment))
}

/// Whether the flyer overlaps the ground. Dead flyers never collide.
pub fn test_ground_collision(flyer: &Flyer, ground: &Rect) -> Option<Collision> {
    if flyer.alive && flyer.bounds().overlaps(ground) {
        Some(Collision::Ground)
    } else {
        None
    }
}

/// Mark every pair whose trailing edge the flyer has cleared. Returns how
/// many pairs were passed this tick; each pair counts at most once.
pub fn update_passage(flyer: &Flyer, pairs: &mut [PipePair]) -> u32 {
    let mut passed = 0;
    for pair in pairs.iter_mut().filter(|p| !p.passed) {
        if flyer.x > pair.trailing_edge() {
            pair.passed = true;
            passed += 1;
        }
    }
    passed
}
