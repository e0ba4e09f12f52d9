//! Default tuning for the game world.
//!
//! All distances are world units (pixels in the reference 800×600 world),
//! all times are seconds. `GameConfig::default()` is built from these.

// World
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 112.0;

// Pipes
/// Vertical size of the passable gap in each pipe pair.
pub const PIPE_GAP: f64 = 180.0;
pub const PIPE_WIDTH: f64 = 60.0;
/// Horizontal scroll speed (units per second, leftward).
pub const PIPE_SPEED: f64 = 160.0;
/// Seconds between pipe pair spawns.
pub const SPAWN_INTERVAL: f64 = 2.5;

// Flyer
pub const FLYER_SIZE: f64 = 32.0;
/// Downward acceleration (units per second squared).
pub const GRAVITY: f64 = 320.0;
/// Upward velocity set by a flap. Overrides, never adds.
pub const FLAP_FORCE: f64 = 240.0;
pub const FLYER_START_X: f64 = 120.0;
pub const FLYER_START_Y: f64 = WORLD_HEIGHT / 2.0;

// Round lifecycle
/// Seconds after a crash before a restart request is honored.
pub const RESTART_DELAY: f64 = 1.0;

// Stepping
/// Fixed simulation step used by the drivers (~60 FPS).
pub const PHYSICS_STEP: f64 = 1.0 / 60.0;
/// Largest real-time gap a single frame may feed into the simulation.
/// Anything longer (terminal stalls, suspend) is dropped.
pub const MAX_FRAME_DT: f64 = 0.1;
