//! Round lifecycle: Playing until the first crash, then GameOver until a
//! restart is both allowed and requested.

pub mod logic;
pub mod types;

pub use logic::Round;
pub use types::{FlyerView, GameInput, ObstacleView, RoundState, Snapshot, TickResult};
