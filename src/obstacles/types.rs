//! Pipe pair data.

use crate::collision::Rect;
use serde::{Deserialize, Serialize};

/// Which half of a pipe pair a rectangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Top,
    Bottom,
}

/// A top and bottom pipe sharing one gap. Both segments move and score
/// together, so a pair can only ever be passed once.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    pub width: f64,
    /// Y where the gap begins; also the top segment's height.
    pub gap_start: f64,
    pub gap_height: f64,
    /// Height of the bottom segment, which rests on the ground.
    pub bottom_height: f64,
    /// Leftward speed in units/second.
    pub speed: f64,
    /// Set once the flyer has cleared the trailing edge.
    pub passed: bool,
}

impl PipePair {
    /// Right (trailing) edge.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_end(&self) -> f64 {
        self.gap_start + self.gap_height
    }

    pub fn segment_rect(&self, segment: Segment) -> Rect {
        match segment {
            Segment::Top => Rect::new(self.x, 0.0, self.width, self.gap_start),
            Segment::Bottom => Rect::new(self.x, self.gap_end(), self.width, self.bottom_height),
        }
    }

    /// Both segment rectangles, top first.
    pub fn rects(&self) -> [(Segment, Rect); 2] {
        [
            (Segment::Top, self.segment_rect(Segment::Top)),
            (Segment::Bottom, self.segment_rect(Segment::Bottom)),
        ]
    }
}
