//! Flapper - side-scrolling pipe-dodging game.
//!
//! This library holds the simulation core (flyer physics, pipes, collision
//! and scoring, round lifecycle) plus the headless simulator. The terminal
//! front end lives in the `flapper` binary.

pub mod collision;
pub mod core;
pub mod flyer;
pub mod input;
pub mod obstacles;
pub mod round;
pub mod simulator;

pub use collision::{Collision, Rect};
pub use core::{ConfigError, GameConfig};
pub use flyer::Flyer;
pub use obstacles::{ObstacleManager, PipePair, Segment};
pub use round::{GameInput, Round, RoundState, Snapshot, TickResult};
