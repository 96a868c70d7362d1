use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    BASE_TICK_RATE, BUILTIN_SKINS, BUILTIN_THEMES, MAZE_LEVEL_COUNT, MAZE_SELECT_COLS,
    POINTS_PER_FOOD, POINTS_PER_RANK,
};
use crate::food;
use crate::grid::GridWorld;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Start,
    ModeSelect,
    MazeSelect,
    Terrain,
    Playing,
    Paused,
    GameOver,
    Win,
}

/// The two play modes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameMode {
    Classic,
    Maze,
}

/// One selectable menu row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuEntry {
    Play,
    Terrain,
    ExitGame,
    Continue,
    MainMenu,
    ClassicEndless,
    MazeMissions,
    Theme,
    Skin,
    Back,
}

impl MenuEntry {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Terrain => "TERRAIN",
            Self::ExitGame => "EXIT GAME",
            Self::Continue => "CONTINUE",
            Self::MainMenu => "MAIN MENU",
            Self::ClassicEndless => "CLASSIC ENDLESS",
            Self::MazeMissions => "MAZE MISSIONS",
            Self::Theme => "THEME",
            Self::Skin => "SNAKE SKIN",
            Self::Back => "BACK",
        }
    }
}

/// Complete mutable state for one game session.
///
/// Owns the board, the snake, progress counters, and the menu model; the
/// shell only feeds it intents and ticks and reads it back for rendering.
#[derive(Debug)]
pub struct GameSession {
    pub phase: GamePhase,
    pub world: GridWorld,
    pub snake: Snake,
    pub food: Position,
    pub heading: Option<Direction>,
    pub score: u32,
    pub level: u32,
    /// Currently selected mission level, 1..=10.
    pub maze_level: u8,
    /// Highest playable mission level; monotone within a run, resets with
    /// the process.
    pub unlocked_levels: u8,
    pub menu_index: usize,
    /// Cursor into the 5x2 maze-select level grid.
    pub maze_cursor: usize,
    pub theme_index: usize,
    pub skin_index: usize,
    pub exit_requested: bool,
    previous_phase: Option<GamePhase>,
    theme_count: usize,
    skin_count: usize,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with entropy-seeded randomness.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut session = Self {
            phase: GamePhase::Start,
            world: GridWorld::classic(),
            snake: Snake::single(Position { x: 0, y: 0 }),
            food: Position { x: 0, y: 0 },
            heading: None,
            score: 0,
            level: 1,
            maze_level: 1,
            unlocked_levels: 1,
            menu_index: 0,
            maze_cursor: 0,
            theme_index: 0,
            skin_index: 0,
            exit_requested: false,
            previous_phase: None,
            theme_count: BUILTIN_THEMES.len(),
            skin_count: BUILTIN_SKINS.len(),
            rng,
        };
        session.reset_session(GameMode::Classic);
        session
    }

    /// Tells the session how many themes and skins are cyclable.
    ///
    /// Called once after the cosmetic catalog is loaded, since a user
    /// overlay can extend the builtin sets.
    pub fn set_cosmetic_counts(&mut self, themes: usize, skins: usize) {
        self.theme_count = themes.max(1);
        self.skin_count = skins.max(1);
        self.theme_index = self.theme_index.min(self.theme_count - 1);
        self.skin_index = self.skin_index.min(self.skin_count - 1);
    }

    /// Returns the active play mode, derived from the board variant.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        if self.world.is_maze() {
            GameMode::Maze
        } else {
            GameMode::Classic
        }
    }

    /// Rebuilds the board, snake, and food for a fresh run of `mode`.
    ///
    /// Maze mode regenerates the maze for the selected level; progress
    /// counters reset except `unlocked_levels`.
    pub fn reset_session(&mut self, mode: GameMode) {
        match mode {
            GameMode::Classic => {
                self.world = GridWorld::classic();
                let bounds = self.world.bounds();
                let mid = Position {
                    x: i32::from(bounds.width / 2),
                    y: i32::from(bounds.height / 2),
                };
                self.snake = Snake::from_segments(vec![
                    mid,
                    Position {
                        x: mid.x - 1,
                        y: mid.y,
                    },
                    Position {
                        x: mid.x - 2,
                        y: mid.y,
                    },
                ]);
                self.food = food::spawn(&mut self.rng, bounds, &self.snake);
            }
            GameMode::Maze => {
                self.world = GridWorld::maze(self.maze_level, &mut self.rng);
                self.snake = Snake::single(Position { x: 0, y: 0 });
                self.food = food::mission_target(self.world.bounds());
            }
        }

        self.heading = None;
        self.score = 0;
        self.level = 1;
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// No-op outside of play or before the first directional input. A move
    /// the board rejects (maze wall or boundary) is also a no-op: the snake
    /// stays put and no state changes.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(direction) = self.heading else {
            return;
        };
        let Some(next) = self.world.step(self.snake.head(), direction) else {
            return;
        };

        match self.mode() {
            GameMode::Classic => {
                // Collision is checked against the pre-advance body, so
                // stepping onto the still-present tail cell is terminal.
                if self.snake.occupies(next) {
                    self.phase = GamePhase::GameOver;
                    return;
                }

                let grows = next == self.food;
                self.snake.advance(next, grows);
                if grows {
                    self.score += POINTS_PER_FOOD;
                    self.level = self.score / POINTS_PER_RANK + 1;
                    self.food = food::spawn(&mut self.rng, self.world.bounds(), &self.snake);
                }
            }
            GameMode::Maze => {
                self.snake.become_head(next);
                if next == self.food {
                    self.phase = GamePhase::Win;
                }
            }
        }
    }

    /// Applies one external intent for the current phase.
    ///
    /// Intents that are meaningless in the current phase are ignored rather
    /// than treated as errors.
    pub fn apply_input(&mut self, input: GameInput) {
        if matches!(input, GameInput::Quit) {
            self.exit_requested = true;
            return;
        }

        match self.phase {
            GamePhase::Playing => self.apply_playing_input(input),
            GamePhase::Start | GamePhase::ModeSelect | GamePhase::Paused | GamePhase::Terrain => {
                self.apply_menu_input(input);
            }
            GamePhase::MazeSelect => self.apply_maze_select_input(input),
            GamePhase::GameOver => {
                if matches!(input, GameInput::Confirm) {
                    self.phase = GamePhase::Start;
                    self.menu_index = 0;
                }
            }
            GamePhase::Win => {
                if matches!(input, GameInput::Confirm) {
                    self.complete_mission();
                }
            }
        }
    }

    /// Returns the menu rows for the current phase (empty outside menus).
    #[must_use]
    pub fn menu_entries(&self) -> &'static [MenuEntry] {
        match self.phase {
            GamePhase::Start => &[MenuEntry::Play, MenuEntry::Terrain, MenuEntry::ExitGame],
            GamePhase::Paused => &[MenuEntry::Continue, MenuEntry::Terrain, MenuEntry::MainMenu],
            GamePhase::ModeSelect => &[
                MenuEntry::ClassicEndless,
                MenuEntry::MazeMissions,
                MenuEntry::MainMenu,
            ],
            GamePhase::Terrain => &[MenuEntry::Theme, MenuEntry::Skin, MenuEntry::Back],
            _ => &[],
        }
    }

    /// Reports the tick rate the pacing loop should run at, in frames/sec.
    #[must_use]
    pub fn desired_tick_rate(&self) -> u32 {
        BASE_TICK_RATE + (self.level - 1) * 2
    }

    fn apply_playing_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.steer(direction),
            GameInput::Pause => {
                self.phase = GamePhase::Paused;
                self.menu_index = 0;
            }
            _ => {}
        }
    }

    fn steer(&mut self, direction: Direction) {
        // Maze mode permits reversal: a single-cell body has no neck.
        if let Some(current) = self.heading {
            if !self.world.is_maze() && !direction_change_is_valid(current, direction) {
                return;
            }
        }
        self.heading = Some(direction);
    }

    fn apply_menu_input(&mut self, input: GameInput) {
        let entries = self.menu_entries();
        if entries.is_empty() {
            return;
        }

        match input {
            GameInput::Direction(Direction::Up) => {
                self.menu_index = (self.menu_index + entries.len() - 1) % entries.len();
            }
            GameInput::Direction(Direction::Down) => {
                self.menu_index = (self.menu_index + 1) % entries.len();
            }
            GameInput::Direction(Direction::Left) => self.cycle_entry(entries[self.menu_index], -1),
            GameInput::Direction(Direction::Right) => self.cycle_entry(entries[self.menu_index], 1),
            GameInput::Confirm => self.select_entry(entries[self.menu_index]),
            _ => {}
        }
    }

    fn apply_maze_select_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.move_maze_cursor(direction),
            GameInput::Confirm => {
                let level = self.maze_cursor as u8 + 1;
                // Picking a locked level is a no-op; the lock indicator is
                // the only feedback.
                if level <= self.unlocked_levels {
                    self.maze_level = level;
                    self.reset_session(GameMode::Maze);
                    self.phase = GamePhase::Playing;
                }
            }
            GameInput::Pause => {
                self.phase = GamePhase::ModeSelect;
                self.menu_index = 0;
            }
            GameInput::Quit => {}
        }
    }

    fn move_maze_cursor(&mut self, direction: Direction) {
        let cols = MAZE_SELECT_COLS;
        let rows = usize::from(MAZE_LEVEL_COUNT) / cols;
        let col = self.maze_cursor % cols;
        let row = self.maze_cursor / cols;

        let (col, row) = match direction {
            Direction::Left => ((col + cols - 1) % cols, row),
            Direction::Right => ((col + 1) % cols, row),
            Direction::Up => (col, (row + rows - 1) % rows),
            Direction::Down => (col, (row + 1) % rows),
        };

        self.maze_cursor = row * cols + col;
    }

    fn select_entry(&mut self, entry: MenuEntry) {
        match entry {
            MenuEntry::Play => {
                self.phase = GamePhase::ModeSelect;
                self.menu_index = 0;
            }
            MenuEntry::Continue => self.phase = GamePhase::Playing,
            MenuEntry::Terrain => {
                self.previous_phase = Some(self.phase);
                self.phase = GamePhase::Terrain;
                self.menu_index = 0;
            }
            MenuEntry::ClassicEndless => {
                self.reset_session(GameMode::Classic);
                self.phase = GamePhase::Playing;
            }
            MenuEntry::MazeMissions => {
                self.phase = GamePhase::MazeSelect;
                self.maze_cursor = 0;
            }
            MenuEntry::MainMenu => {
                self.phase = GamePhase::Start;
                self.menu_index = 0;
            }
            MenuEntry::Back => {
                self.phase = self.previous_phase.take().unwrap_or(GamePhase::Start);
                self.menu_index = 0;
            }
            MenuEntry::ExitGame => self.exit_requested = true,
            // Cycled with left/right; confirm does nothing on these rows.
            MenuEntry::Theme | MenuEntry::Skin => {}
        }
    }

    fn cycle_entry(&mut self, entry: MenuEntry, delta: i32) {
        match entry {
            MenuEntry::Theme => {
                self.theme_index = cycle_index(self.theme_index, self.theme_count, delta);
            }
            MenuEntry::Skin => {
                self.skin_index = cycle_index(self.skin_index, self.skin_count, delta);
            }
            _ => {}
        }
    }

    fn complete_mission(&mut self) {
        // Advances at most one level per completion, only when the finished
        // level is the frontier, capped at the last mission.
        if self.maze_level == self.unlocked_levels {
            self.unlocked_levels = (self.unlocked_levels + 1).min(MAZE_LEVEL_COUNT);
        }
        self.phase = GamePhase::MazeSelect;
        self.maze_cursor = usize::from(self.maze_level) - 1;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle_index(index: usize, len: usize, delta: i32) -> usize {
    debug_assert!(len > 0);
    (index as i32 + delta).rem_euclid(len as i32) as usize
}
