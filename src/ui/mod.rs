//! Terminal rendering. Reads `Snapshot`s only; never mutates game state.

mod chrome;
pub mod play_scene;

use flapper::round::Snapshot;
use play_scene::{render_play, Hud};
use ratatui::Frame;

/// Draw one frame.
pub fn draw(frame: &mut Frame, snap: &Snapshot, hud: &Hud) {
    let area = frame.size();
    render_play(frame, area, snap, hud);
}
