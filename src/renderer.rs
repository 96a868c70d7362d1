use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Skin, Theme, GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GLYPH_WALL,
    MAZE_TARGET_COLOR,
};
use crate::game::{GamePhase, GameSession};
use crate::grid::GridWorld;
use crate::maze::WallGrid;
use crate::snake::Position;
use crate::theme::ThemeCatalog;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_maze_select, render_menu, render_overlay};

/// Renders one full frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, catalog: &ThemeCatalog) {
    let theme = catalog.theme_at(session.theme_index);
    let skin = catalog.skin_at(session.skin_index);

    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(theme.bg)), area);

    match session.phase {
        GamePhase::Start | GamePhase::ModeSelect | GamePhase::Paused | GamePhase::Terrain => {
            render_menu(frame, area, session, catalog, theme);
        }
        GamePhase::MazeSelect => render_maze_select(frame, area, session, theme),
        GamePhase::Playing | GamePhase::GameOver | GamePhase::Win => {
            let play_area = render_hud(frame, area, session, theme);
            render_field(frame, play_area, session, theme, skin);

            match session.phase {
                GamePhase::GameOver => {
                    render_overlay(frame, play_area, "GAME OVER", "SPACE FOR START");
                }
                GamePhase::Win => {
                    render_overlay(frame, play_area, "MISSION CLEAR", "SPACE FOR MISSIONS");
                }
                _ => {}
            }
        }
    }
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    theme: &Theme,
    skin: &Skin,
) {
    match &session.world {
        GridWorld::Classic { .. } => render_classic_field(frame, area, session, theme, skin),
        GridWorld::Maze { walls, .. } => render_maze_field(frame, area, session, walls, theme, skin),
    }
}

fn render_classic_field(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    theme: &Theme,
    skin: &Skin,
) {
    let bounds = session.world.bounds();
    let origin = field_origin(area, bounds.width, bounds.height);
    let buffer = frame.buffer_mut();

    // Faint dot per empty cell keeps the wrap-around field readable.
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let Some((col, row)) = cell_to_terminal(area, origin, Position { x, y }) else {
                continue;
            };
            buffer.set_string(col, row, GLYPH_GRID_DOT, Style::new().fg(theme.grid));
        }
    }

    if let Some((col, row)) = cell_to_terminal(area, origin, session.food) {
        buffer.set_string(col, row, GLYPH_FOOD, Style::new().fg(theme.ui));
    }

    let head = session.snake.head();
    for segment in session.snake.segments() {
        let Some((col, row)) = cell_to_terminal(area, origin, *segment) else {
            continue;
        };
        if *segment == head {
            buffer.set_string(
                col,
                row,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(skin.head).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(col, row, GLYPH_SNAKE_BODY, Style::new().fg(skin.body));
        }
    }
}

/// Maze cells map onto a character lattice: cell (x, y) renders at
/// (2x+1, 2y+1), wall segments at the even coordinates between them.
fn render_maze_field(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    walls: &WallGrid,
    theme: &Theme,
    skin: &Skin,
) {
    let cols = walls.cols() as u16;
    let rows = walls.rows() as u16;
    let origin = field_origin(area, cols * 2 + 1, rows * 2 + 1);
    let wall_style = Style::new().fg(theme.wall);
    let buffer = frame.buffer_mut();

    for col in 0..=walls.cols() {
        for row in 0..walls.rows() {
            if walls.vertical_wall(col, row) {
                put_lattice(buffer, area, origin, 2 * col, 2 * row + 1, wall_style);
            }
        }
    }
    for col in 0..walls.cols() {
        for row in 0..=walls.rows() {
            if walls.horizontal_wall(col, row) {
                put_lattice(buffer, area, origin, 2 * col + 1, 2 * row, wall_style);
            }
        }
    }
    // Lattice posts at every cell corner.
    for col in 0..=walls.cols() {
        for row in 0..=walls.rows() {
            put_lattice(buffer, area, origin, 2 * col, 2 * row, wall_style);
        }
    }

    if let Some((col, row)) = lattice_coords(area, origin, session.food) {
        buffer.set_string(col, row, GLYPH_FOOD, Style::new().fg(MAZE_TARGET_COLOR));
    }

    if let Some((col, row)) = lattice_coords(area, origin, session.snake.head()) {
        buffer.set_string(
            col,
            row,
            GLYPH_SNAKE_HEAD,
            Style::new().fg(skin.head).add_modifier(Modifier::BOLD),
        );
    }
}

fn field_origin(area: Rect, needed_width: u16, needed_height: u16) -> (u16, u16) {
    (
        area.x + area.width.saturating_sub(needed_width) / 2,
        area.y + area.height.saturating_sub(needed_height) / 2,
    )
}

fn cell_to_terminal(area: Rect, origin: (u16, u16), position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let col = origin.0.checked_add(x_offset)?;
    let row = origin.1.checked_add(y_offset)?;
    if col >= area.right() || row >= area.bottom() {
        return None;
    }

    Some((col, row))
}

fn lattice_coords(area: Rect, origin: (u16, u16), position: Position) -> Option<(u16, u16)> {
    let x = u16::try_from(position.x).ok()?;
    let y = u16::try_from(position.y).ok()?;

    let col = origin.0.checked_add(2 * x + 1)?;
    let row = origin.1.checked_add(2 * y + 1)?;
    if col >= area.right() || row >= area.bottom() {
        return None;
    }

    Some((col, row))
}

fn put_lattice(
    buffer: &mut ratatui::buffer::Buffer,
    area: Rect,
    origin: (u16, u16),
    x: usize,
    y: usize,
    style: Style,
) {
    let Ok(x) = u16::try_from(x) else { return };
    let Ok(y) = u16::try_from(y) else { return };
    let Some(col) = origin.0.checked_add(x) else {
        return;
    };
    let Some(row) = origin.1.checked_add(y) else {
        return;
    };
    if col >= area.right() || row >= area.bottom() {
        return;
    }

    buffer.set_string(col, row, GLYPH_WALL, style);
}
