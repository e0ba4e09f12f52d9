//! Game configuration.
//!
//! Values are fixed for the lifetime of a `Round`. They come from the
//! defaults in `constants.rs`, optionally overridden by a JSON file.

use super::constants::*;
use super::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Tunable parameters for the world, the flyer, the pipes and the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub ground_height: f64,

    pub pipe_gap: f64,
    pub pipe_width: f64,
    pub pipe_speed: f64,
    pub spawn_interval: f64,

    pub flyer_size: f64,
    pub gravity: f64,
    pub flap_force: f64,
    pub flyer_start_x: f64,
    pub flyer_start_y: f64,

    pub restart_delay: f64,

    pub physics_step: f64,
    pub max_frame_dt: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,
            spawn_interval: SPAWN_INTERVAL,

            flyer_size: FLYER_SIZE,
            gravity: GRAVITY,
            flap_force: FLAP_FORCE,
            flyer_start_x: FLYER_START_X,
            flyer_start_y: FLYER_START_Y,

            restart_delay: RESTART_DELAY,

            physics_step: PHYSICS_STEP,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    /// The result is validated.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load `path` if given, else the platform config file if it exists,
    /// else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/config.json` for this platform, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "flapper").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Platform data directory, created on demand. Used for the log file.
    pub fn data_dir() -> io::Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "flapper").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        let dir = dirs.data_dir().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Check every value a round depends on.
    ///
    /// A config that passes guarantees a non-empty gap-start range, so pipe
    /// pairs are never spawned with a negative or degenerate gap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ground_height", self.ground_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("pipe_speed", self.pipe_speed),
            ("spawn_interval", self.spawn_interval),
            ("flyer_size", self.flyer_size),
            ("gravity", self.gravity),
            ("flap_force", self.flap_force),
            ("physics_step", self.physics_step),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        if !self.restart_delay.is_finite() || self.restart_delay < 0.0 {
            return Err(ConfigError::invalid(
                "restart_delay",
                format!("must be zero or positive, got {}", self.restart_delay),
            ));
        }

        if self.ground_height >= self.world_height {
            return Err(ConfigError::invalid(
                "ground_height",
                format!(
                    "{} leaves no sky in a world {} high",
                    self.ground_height, self.world_height
                ),
            ));
        }

        if self.pipe_gap >= self.world_height {
            return Err(ConfigError::invalid(
                "pipe_gap",
                format!(
                    "{} does not fit in a world {} high",
                    self.pipe_gap, self.world_height
                ),
            ));
        }

        let (min_gap_start, max_gap_start) = self.gap_start_range();
        if min_gap_start > max_gap_start {
            return Err(ConfigError::invalid(
                "pipe_gap",
                format!(
                    "gap start range [{min_gap_start}, {max_gap_start}] is empty"
                ),
            ));
        }

        if self.flyer_size >= self.pipe_gap {
            return Err(ConfigError::invalid(
                "flyer_size",
                format!(
                    "{} cannot fit through a gap of {}",
                    self.flyer_size, self.pipe_gap
                ),
            ));
        }

        // The whole flyer box must start in open sky
        let radius = self.flyer_radius();
        let ground_top = self.ground_top();
        if !(0.0..=self.world_width).contains(&self.flyer_start_x) {
            return Err(ConfigError::invalid(
                "flyer_start_x",
                format!("{} is outside the world", self.flyer_start_x),
            ));
        }
        if !(radius..=ground_top - radius).contains(&self.flyer_start_y) {
            return Err(ConfigError::invalid(
                "flyer_start_y",
                format!(
                    "{} must keep a flyer of radius {radius} between the ceiling and the ground (y = {ground_top})",
                    self.flyer_start_y
                ),
            ));
        }

        Ok(())
    }

    /// Y coordinate of the ground's top edge.
    pub fn ground_top(&self) -> f64 {
        self.world_height - self.ground_height
    }

    /// Closed range of legal gap-start values: the gap keeps at least one
    /// gap-height of clearance from the ceiling and from the ground.
    pub fn gap_start_range(&self) -> (f64, f64) {
        (
            self.pipe_gap,
            self.world_height - self.pipe_gap - self.ground_height,
        )
    }

    pub fn flyer_radius(&self) -> f64 {
        self.flyer_size / 2.0
    }
}
