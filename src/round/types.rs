//! Round lifecycle data: states, inputs, per-tick events and the render view.

use crate::collision::{Collision, Rect};
use crate::obstacles::Segment;
use serde::{Deserialize, Serialize};

/// Where the round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Playing,
    /// Crashed. Waits for the restart delay, then for a restart request.
    GameOver,
}

/// Discrete player inputs, already normalized by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Flap,
    Restart,
}

/// Everything that happened during one tick.
///
/// Lets the front end react (crash flash, sounds) without the simulation
/// knowing anything about presentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// A queued flap was applied.
    pub flapped: bool,
    pub pairs_spawned: u32,
    pub pairs_passed: u32,
    pub pairs_retired: usize,
    /// What the flyer hit, on the tick the round ended.
    pub collision: Option<Collision>,
    /// The round entered GameOver on this tick.
    pub game_over: bool,
    /// A new round started on this tick.
    pub restarted: bool,
    /// The restart delay ran out on this tick.
    pub restart_unlocked: bool,
}

/// Flyer as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyerView {
    pub x: f64,
    pub y: f64,
    pub vel_y: f64,
    pub radius: f64,
    /// Hidden once it has crashed.
    pub visible: bool,
}

/// One pipe segment to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub segment: Segment,
    pub rect: Rect,
    pub passed: bool,
}

/// Read-only state handed to the render adapter once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub flyer: FlyerView,
    pub obstacles: Vec<ObstacleView>,
    pub ground: Rect,
    pub world_width: f64,
    pub world_height: f64,
    pub score: u32,
    pub state: RoundState,
    pub can_restart: bool,
}
