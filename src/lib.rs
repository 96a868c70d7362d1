pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod maze;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;

pub mod ui {
    pub mod hud;
    pub mod menu;
}
