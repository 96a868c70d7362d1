use rand::Rng;

use crate::config::{self, GridSize};
use crate::input::Direction;
use crate::maze::WallGrid;
use crate::snake::Position;

/// Active board geometry plus mode-specific movement rules.
///
/// The two modes are structurally different boards, so the mode tag carries
/// the data only one of them needs: classic is an unbounded wrap-around
/// field, maze adds the wall adjacency matrices.
#[derive(Debug, Clone)]
pub enum GridWorld {
    Classic { bounds: GridSize },
    Maze { bounds: GridSize, walls: WallGrid },
}

impl GridWorld {
    /// Creates the classic endless board.
    #[must_use]
    pub fn classic() -> Self {
        Self::Classic {
            bounds: config::classic_bounds(),
        }
    }

    /// Creates a maze board for a mission level, carving a fresh maze.
    #[must_use]
    pub fn maze<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Self {
        let bounds = config::maze_bounds(level);
        Self::Maze {
            bounds,
            walls: WallGrid::generate(bounds, rng),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        match self {
            Self::Classic { bounds } | Self::Maze { bounds, .. } => *bounds,
        }
    }

    /// Returns the wall matrices in maze mode, `None` in classic mode.
    #[must_use]
    pub fn walls(&self) -> Option<&WallGrid> {
        match self {
            Self::Classic { .. } => None,
            Self::Maze { walls, .. } => Some(walls),
        }
    }

    #[must_use]
    pub fn is_maze(&self) -> bool {
        matches!(self, Self::Maze { .. })
    }

    /// Resolves one movement request.
    ///
    /// Classic mode always succeeds: the horizontal axis wraps modulo the
    /// board width, while the vertical axis jumps directly to the far edge
    /// (top exit lands on the bottom-most row, bottom exit on row 0).
    /// The two axes intentionally do not share one wrap rule.
    ///
    /// Maze mode returns `None` when the boundary or a closed wall blocks
    /// the move; callers treat that as a no-op tick.
    #[must_use]
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        match self {
            Self::Classic { bounds } => {
                let raw = from.neighbor(direction);
                let height = i32::from(bounds.height);

                let x = wrap_axis(raw.x, i32::from(bounds.width));
                let y = if raw.y < 0 {
                    height - 1
                } else if raw.y >= height {
                    0
                } else {
                    raw.y
                };

                Some(Position { x, y })
            }
            Self::Maze { walls, .. } => {
                if walls.blocks(from, direction) {
                    None
                } else {
                    Some(from.neighbor(direction))
                }
            }
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::input::Direction;
    use crate::maze::WallGrid;
    use crate::snake::Position;

    use super::GridWorld;

    #[test]
    fn classic_wraps_horizontally_modulo_width() {
        let world = GridWorld::classic();
        let bounds = world.bounds();
        let last_col = i32::from(bounds.width) - 1;

        assert_eq!(
            world.step(Position { x: 0, y: 3 }, Direction::Left),
            Some(Position { x: last_col, y: 3 })
        );
        assert_eq!(
            world.step(Position { x: last_col, y: 3 }, Direction::Right),
            Some(Position { x: 0, y: 3 })
        );
    }

    #[test]
    fn classic_vertical_exit_jumps_to_far_edge() {
        let world = GridWorld::classic();
        let bounds = world.bounds();
        let last_row = i32::from(bounds.height) - 1;

        // Leaving through the top lands on the bottom-most row; leaving
        // through the bottom lands on row 0. Direct jump, not modulo.
        assert_eq!(
            world.step(Position { x: 7, y: 0 }, Direction::Up),
            Some(Position { x: 7, y: last_row })
        );
        assert_eq!(
            world.step(Position { x: 7, y: last_row }, Direction::Down),
            Some(Position { x: 7, y: 0 })
        );
    }

    #[test]
    fn maze_blocks_boundary_and_walls() {
        let mut rng = StdRng::seed_from_u64(11);
        let world = GridWorld::maze(1, &mut rng);
        let origin = Position { x: 0, y: 0 };

        assert_eq!(world.step(origin, Direction::Up), None);
        assert_eq!(world.step(origin, Direction::Left), None);

        // A perfect maze leaves the origin at least one carved passage.
        let open_moves = [Direction::Down, Direction::Right]
            .into_iter()
            .filter(|direction| world.step(origin, *direction).is_some())
            .count();
        assert!(open_moves >= 1);
    }

    #[test]
    fn unwalled_maze_allows_interior_moves_only() {
        let bounds = crate::config::maze_bounds(1);
        let world = GridWorld::Maze {
            bounds,
            walls: WallGrid::without_walls(bounds),
        };

        assert_eq!(
            world.step(Position { x: 1, y: 1 }, Direction::Right),
            Some(Position { x: 2, y: 1 })
        );
        assert_eq!(world.step(Position { x: 0, y: 0 }, Direction::Up), None);
    }
}
