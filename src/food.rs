use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell not occupied by the snake.
///
/// Rejection sampling: occupied cells are a small fraction of the board in
/// any live game, so the expected retry count is O(1) and the loop
/// terminates almost surely. The caller must leave at least one free cell.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    debug_assert!(snake.len() < bounds.total_cells());

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

/// The fixed maze mission target: the cell diagonally opposite the start.
///
/// Set once per session reset and never re-spawned; reaching it ends the
/// mission in a win.
#[must_use]
pub fn mission_target(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width) - 1,
        y: i32::from(bounds.height) - 1,
    }
}
