use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site, and lets classic
/// and maze boards of different resolutions share the same movement code.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Reference screen geometry the cell grids are derived from.
///
/// The playfield is an 800x600 canvas with a 40px HUD band at the top, so
/// every board resolution is `800/cell` columns by `560/cell` rows.
pub const SCREEN_WIDTH_PX: u16 = 800;
pub const SCREEN_HEIGHT_PX: u16 = 600;
pub const HUD_HEIGHT_PX: u16 = 40;
pub const PLAYFIELD_HEIGHT_PX: u16 = SCREEN_HEIGHT_PX - HUD_HEIGHT_PX;

/// Cell size of the classic endless board.
pub const CLASSIC_CELL_PX: u16 = 20;

/// Returns the classic-mode board resolution (40x28 cells).
#[must_use]
pub fn classic_bounds() -> GridSize {
    bounds_for_cell(CLASSIC_CELL_PX)
}

/// Returns the maze cell size for a mission level.
///
/// Levels are grouped into three tiers: coarse cells for 1-3, medium for
/// 4-7, fine for 8-10. Difficulty comes from cell count, not from the
/// generator itself.
#[must_use]
pub fn maze_cell_px(level: u8) -> u16 {
    if level <= 3 {
        50
    } else if level <= 7 {
        40
    } else {
        25
    }
}

/// Returns the maze board resolution for a mission level.
#[must_use]
pub fn maze_bounds(level: u8) -> GridSize {
    bounds_for_cell(maze_cell_px(level))
}

fn bounds_for_cell(cell_px: u16) -> GridSize {
    GridSize {
        width: SCREEN_WIDTH_PX / cell_px,
        height: PLAYFIELD_HEIGHT_PX / cell_px,
    }
}

/// Base tick rate in frames per second at rank 1.
pub const BASE_TICK_RATE: u32 = 10;

/// Points granted per food eaten in classic mode.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score needed per rank (speed level) increase.
pub const POINTS_PER_RANK: u32 = 50;

/// Number of maze mission levels.
pub const MAZE_LEVEL_COUNT: u8 = 10;

/// Columns in the maze-select level grid (two rows of five).
pub const MAZE_SELECT_COLS: usize = 5;

/// A color theme applied to board and UI chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Background fill behind the playfield.
    pub bg: Color,
    /// Faint dot color for empty classic cells.
    pub grid: Color,
    /// Maze wall color.
    pub wall: Color,
    /// HUD text, menu highlight, and classic food color.
    pub ui: Color,
}

/// A snake skin: head and body segment colors.
#[derive(Debug, Clone, Copy)]
pub struct Skin {
    pub head: Color,
    pub body: Color,
}

pub const THEME_MAINFRAME: Theme = Theme {
    bg: Color::Rgb(5, 8, 10),
    grid: Color::Rgb(15, 25, 30),
    wall: Color::Rgb(255, 255, 255),
    ui: Color::Rgb(0, 255, 180),
};

pub const THEME_VOID: Theme = Theme {
    bg: Color::Rgb(10, 10, 10),
    grid: Color::Rgb(25, 25, 25),
    wall: Color::Rgb(200, 200, 200),
    ui: Color::Rgb(200, 200, 200),
};

pub const THEME_SYNTHWAVE: Theme = Theme {
    bg: Color::Rgb(20, 0, 30),
    grid: Color::Rgb(45, 0, 65),
    wall: Color::Rgb(255, 0, 255),
    ui: Color::Rgb(255, 0, 255),
};

/// Builtin themes in cycle order.
pub const BUILTIN_THEMES: &[(&str, Theme)] = &[
    ("mainframe", THEME_MAINFRAME),
    ("void", THEME_VOID),
    ("synthwave", THEME_SYNTHWAVE),
];

pub const SKIN_CLASSIC: Skin = Skin {
    head: Color::Rgb(255, 255, 255),
    body: Color::Rgb(150, 150, 150),
};

pub const SKIN_NEON: Skin = Skin {
    head: Color::Rgb(0, 255, 255),
    body: Color::Rgb(0, 100, 100),
};

pub const SKIN_TOXIC: Skin = Skin {
    head: Color::Rgb(170, 255, 0),
    body: Color::Rgb(60, 90, 0),
};

/// Builtin skins in cycle order.
pub const BUILTIN_SKINS: &[(&str, Skin)] = &[
    ("classic", SKIN_CLASSIC),
    ("neon", SKIN_NEON),
    ("toxic", SKIN_TOXIC),
];

/// Mission target color in maze mode.
pub const MAZE_TARGET_COLOR: Color = Color::Rgb(255, 50, 50);

/// Solid block glyph for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Shaded block glyph for body segments.
pub const GLYPH_SNAKE_BODY: &str = "▒";

/// Food / mission target glyph.
pub const GLYPH_FOOD: &str = "●";

/// Maze wall glyph.
pub const GLYPH_WALL: &str = "█";

/// Faint dot marking empty classic cells.
pub const GLYPH_GRID_DOT: &str = "·";

#[cfg(test)]
mod tests {
    use super::{classic_bounds, maze_bounds, maze_cell_px, GridSize};

    #[test]
    fn classic_board_is_forty_by_twenty_eight() {
        assert_eq!(
            classic_bounds(),
            GridSize {
                width: 40,
                height: 28
            }
        );
    }

    #[test]
    fn maze_tiers_select_three_resolutions() {
        assert_eq!(maze_cell_px(1), 50);
        assert_eq!(maze_cell_px(3), 50);
        assert_eq!(maze_cell_px(4), 40);
        assert_eq!(maze_cell_px(7), 40);
        assert_eq!(maze_cell_px(8), 25);
        assert_eq!(maze_cell_px(10), 25);

        assert_eq!(
            maze_bounds(1),
            GridSize {
                width: 16,
                height: 11
            }
        );
        assert_eq!(
            maze_bounds(5),
            GridSize {
                width: 20,
                height: 14
            }
        );
        assert_eq!(
            maze_bounds(9),
            GridSize {
                width: 32,
                height: 22
            }
        );
    }
}
