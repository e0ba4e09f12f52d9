//! Pipe obstacles.
//!
//! Pairs spawn at the right edge on a fixed cadence, scroll left at a
//! constant speed and are retired once fully off the left edge.

pub mod logic;
pub mod types;

pub use logic::ObstacleManager;
pub use types::{PipePair, Segment};
