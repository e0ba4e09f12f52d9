//! Screen furniture around the play field: border, sidebar, status line
//! and the game-over banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Sidebar width in columns, borders included.
const SIDEBAR_WIDTH: u16 = 22;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Areas returned by [`play_layout`].
pub struct PlayLayout {
    /// Play field, sized to the world's aspect ratio where it fits.
    pub field: Rect,
    /// One line under the play field.
    pub status: Rect,
    pub sidebar: Rect,
}

/// A `[key] action` hint on the status line.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

/// Draw the outer border and split the screen.
///
/// ```text
/// ┌─ Flapper ──────────────────────────┬─ Round ────┐
/// │      [field, centered]             │ [sidebar]  │
/// │ status message        [key] hints  │            │
/// └────────────────────────────────────┴────────────┘
/// ```
pub fn play_layout(
    frame: &mut Frame,
    area: Rect,
    border_color: Color,
    world_aspect: f64,
) -> PlayLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flapper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(columns[0]);

    PlayLayout {
        field: fit_field(rows[0], world_aspect),
        status: rows[1],
        sidebar: columns[1],
    }
}

/// Narrow `area` so the world is not stretched sideways.
fn fit_field(area: Rect, world_aspect: f64) -> Rect {
    let wanted = (area.height as f64 * world_aspect * CELL_ASPECT).round();
    let width = (wanted as u16).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Status message on the left, key hints right-aligned.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }

    let mut spans = Vec::new();
    for hint in hints {
        spans.push(Span::styled(
            format!(" {}", hint.key),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            format!(" {} ", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let hints = Line::from(spans);
    let hints_width = (hints.width() as u16).min(area.width);

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {message}")).style(Style::default().fg(color)),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Right),
        parts[1],
    );
}

/// Bordered " Round " box. Returns the inner area.
pub fn render_sidebar_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Round ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Game-over banner along the bottom of `area`. Leaves the play field
/// visible above it.
///
/// The prompt is dimmed until `prompt_ready`, matching whether a restart
/// request would currently be accepted.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    prompt: &str,
    prompt_ready: bool,
) {
    let banner_height: u16 = 4;
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let prompt_style = if prompt_ready {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(prompt, prompt_style)),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
