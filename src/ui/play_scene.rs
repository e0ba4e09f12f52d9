//! Rendering of a running round.

use super::chrome::{
    play_layout, render_game_over_banner, render_sidebar_frame, render_status_line, KeyHint,
};
use flapper::round::{RoundState, Snapshot};
use flapper::Segment;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Front-end state that is not part of the simulation.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    /// Best score this session.
    pub best_score: u32,
    pub round_number: u32,
    /// Frames left on the crash flash.
    pub crash_flash: u32,
}

/// Render the whole play screen.
pub fn render_play(frame: &mut Frame, area: Rect, snap: &Snapshot, hud: &Hud) {
    let border = if hud.crash_flash > 0 {
        Color::Red
    } else {
        Color::Cyan
    };
    let layout = play_layout(frame, area, border, snap.world_width / snap.world_height);

    render_play_area(frame, layout.field, snap, hud);
    render_status(frame, layout.status, snap);
    render_sidebar(frame, layout.sidebar, snap, hud);

    if snap.state == RoundState::GameOver {
        let prompt = if snap.can_restart {
            "Press R to restart"
        } else {
            "..."
        };
        render_game_over_banner(
            frame,
            layout.field,
            "Game Over!",
            &format!("Score: {}", snap.score),
            prompt,
            snap.can_restart,
        );
    }
}

/// What occupies one terminal cell.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    PipeLip,
    Ground,
}

/// Draw the world scaled to the play area, sampling each cell's center.
fn render_play_area(frame: &mut Frame, area: Rect, snap: &Snapshot, hud: &Hud) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snap.world_width / width as f64;
    let y_scale = snap.world_height / height as f64;

    let flyer_cell = if snap.flyer.visible {
        Some((
            ((snap.flyer.x / x_scale) as usize).min(width - 1),
            ((snap.flyer.y / y_scale) as usize).min(height - 1),
        ))
    } else {
        None
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if flyer_cell == Some((col, row)) {
                let glyph = if snap.flyer.vel_y < -60.0 {
                    "▲"
                } else if snap.flyer.vel_y > 180.0 {
                    "▼"
                } else {
                    "►"
                };
                spans.push(Span::styled(
                    glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let wx = (col as f64 + 0.5) * x_scale;
            let span = match classify(snap, wx, wy, y_scale) {
                Cell::Sky => Span::raw(" "),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::PipeLip => Span::styled("▀", Style::default().fg(Color::LightGreen)),
                Cell::Ground if hud.crash_flash > 0 => {
                    Span::styled("▓", Style::default().fg(Color::Red))
                }
                Cell::Ground => Span::styled("▓", Style::default().fg(Color::Rgb(34, 139, 34))),
            };
            spans.push(span);
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn classify(snap: &Snapshot, wx: f64, wy: f64, y_scale: f64) -> Cell {
    if wy >= snap.ground.y {
        return Cell::Ground;
    }

    for obstacle in &snap.obstacles {
        let r = &obstacle.rect;
        if wx < r.x || wx >= r.right() || wy < r.y || wy >= r.bottom() {
            continue;
        }
        // Mark the row touching the gap so thin gaps stay readable
        let lip = match obstacle.segment {
            Segment::Top => r.bottom() - wy < y_scale,
            Segment::Bottom => wy - r.y < y_scale,
        };
        return if lip { Cell::PipeLip } else { Cell::Pipe };
    }

    Cell::Sky
}

const HINTS: [KeyHint; 3] = [
    KeyHint {
        key: "[Space/W/Up]",
        action: "Flap",
    },
    KeyHint {
        key: "[R]",
        action: "Restart",
    },
    KeyHint {
        key: "[Esc]",
        action: "Quit",
    },
];

fn render_status(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    match snap.state {
        RoundState::Playing if snap.score == 0 && snap.obstacles.is_empty() => {
            render_status_line(frame, area, "Press SPACE to flap", Color::Yellow, &HINTS)
        }
        RoundState::Playing => render_status_line(
            frame,
            area,
            &format!("Score: {}", snap.score),
            Color::Green,
            &HINTS,
        ),
        RoundState::GameOver => {
            render_status_line(frame, area, "Crashed!", Color::Red, &HINTS)
        }
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, snap: &Snapshot, hud: &Hud) {
    let inner = render_sidebar_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let (state_text, state_color) = match snap.state {
        RoundState::Playing => ("Flying", Color::Green),
        RoundState::GameOver if snap.can_restart => ("Ready", Color::Yellow),
        RoundState::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(format!("{}", snap.score), value),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                format!("{}", hud.best_score.max(snap.score)),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Round: ", label),
            Span::styled(format!("{}", hud.round_number), value),
        ]),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(state_text, Style::default().fg(state_color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{}", snap.obstacles.len() / 2),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
