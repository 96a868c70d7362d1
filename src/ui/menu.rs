use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, MAZE_LEVEL_COUNT, MAZE_SELECT_COLS};
use crate::game::{GamePhase, GameSession, MenuEntry};
use crate::theme::ThemeCatalog;

const LEVEL_BOX_WIDTH: u16 = 10;
const LEVEL_BOX_HEIGHT: u16 = 3;
const LEVEL_BOX_GAP: u16 = 2;

/// Draws the menu screen for the current phase (start, pause, mode select,
/// terrain) as a centered popup over the background.
pub fn render_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    catalog: &ThemeCatalog,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE ELITE"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.ui).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let entries = session.menu_entries();
    let label_width = entries
        .iter()
        .map(|entry| entry_display(*entry, session, catalog).width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let display = entry_display(*entry, session, catalog);
        let padded = format!("{display:^label_width$}");
        let style = if index == session.menu_index {
            Style::new().fg(theme.ui).add_modifier(Modifier::REVERSED)
        } else {
            Style::new().fg(Color::Rgb(180, 180, 180))
        };
        lines.push(Line::from(padded).style(style));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(menu_title(session.phase))),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(
            "Arrows/WASD move  [Enter] select  [←]/[→] cycle",
        ))
        .alignment(Alignment::Center)
        .style(Style::new().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the 5x2 mission-select grid with lock markers.
pub fn render_maze_select(frame: &mut Frame<'_>, area: Rect, session: &GameSession, theme: &Theme) {
    let cols = MAZE_SELECT_COLS as u16;
    let rows = u16::from(MAZE_LEVEL_COUNT) / cols;
    let grid_width = cols * LEVEL_BOX_WIDTH + (cols - 1) * LEVEL_BOX_GAP;
    let grid_height = rows * LEVEL_BOX_HEIGHT + (rows - 1) + 4;

    let origin_x = area.x + area.width.saturating_sub(grid_width) / 2;
    let origin_y = area.y + area.height.saturating_sub(grid_height) / 2;

    frame.render_widget(
        Paragraph::new(Line::from("MAZE MISSIONS"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.ui).add_modifier(Modifier::BOLD)),
        Rect {
            x: area.x,
            y: origin_y,
            width: area.width,
            height: 1,
        },
    );

    for level in 1..=MAZE_LEVEL_COUNT {
        let index = usize::from(level) - 1;
        let col = (index % MAZE_SELECT_COLS) as u16;
        let row = (index / MAZE_SELECT_COLS) as u16;
        let cell = Rect {
            x: origin_x + col * (LEVEL_BOX_WIDTH + LEVEL_BOX_GAP),
            y: origin_y + 2 + row * (LEVEL_BOX_HEIGHT + 1),
            width: LEVEL_BOX_WIDTH,
            height: LEVEL_BOX_HEIGHT,
        };
        if cell.right() > area.right() || cell.bottom() > area.bottom() {
            continue;
        }

        let locked = level > session.unlocked_levels;
        let selected = index == session.maze_cursor;
        let color = if locked {
            Color::Rgb(60, 60, 60)
        } else {
            theme.ui
        };
        let mut style = Style::new().fg(color);
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label = if locked {
            "LOCKED".to_owned()
        } else {
            level.to_string()
        };
        frame.render_widget(
            Paragraph::new(Line::from(label))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered()),
            cell,
        );
    }

    let footer_y = origin_y + 2 + rows * (LEVEL_BOX_HEIGHT + 1);
    if footer_y < area.bottom() {
        frame.render_widget(
            Paragraph::new(Line::from("[Enter] play  [Esc] back"))
                .alignment(Alignment::Center)
                .style(Style::new().fg(Color::DarkGray)),
            Rect {
                x: area.x,
                y: footer_y,
                width: area.width,
                height: 1,
            },
        );
    }
}

/// Draws a full-screen terminal overlay (game over, mission clear).
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, title: &str, subtitle: &str) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(title).style(
            Style::new()
                .fg(Color::Rgb(255, 50, 50))
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(subtitle).style(Style::new().fg(Color::White)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn menu_title(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Start => " main menu ",
        GamePhase::Paused => " paused ",
        GamePhase::ModeSelect => " select mode ",
        GamePhase::Terrain => " terrain ",
        _ => " menu ",
    }
}

fn entry_display(entry: MenuEntry, session: &GameSession, catalog: &ThemeCatalog) -> String {
    match entry {
        MenuEntry::Theme => format!(
            "THEME: < {} >",
            catalog.theme_id_at(session.theme_index).to_uppercase()
        ),
        MenuEntry::Skin => format!(
            "SKIN: < {} >",
            catalog.skin_id_at(session.skin_index).to_uppercase()
        ),
        other => other.label().to_owned(),
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
