use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameMode, GameSession};

/// Renders the one-line HUD band and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let rank = match session.mode() {
        GameMode::Classic => format!("RANK: {}", session.level),
        GameMode::Maze => format!("LVL: {}", session.maze_level),
    };
    let text = format!(
        "SCORE: {} | {} | SPEED: {} FPS",
        session.score,
        rank,
        session.desired_tick_rate()
    );

    frame.render_widget(
        Paragraph::new(Line::from(text))
            .style(Style::new().fg(theme.ui).add_modifier(Modifier::BOLD)),
        hud_area,
    );

    play_area
}
