//! Shared building blocks: configuration, errors and simulation time.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;

pub use clock::{Countdown, FrameClock};
pub use config::GameConfig;
pub use error::ConfigError;
