use rand::Rng;

use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::Position;

/// Wall adjacency data for one generated maze.
///
/// Vertical walls sit between horizontally adjacent cells and are indexed by
/// (col in 0..=cols, row in 0..rows); `vertical[col]` is the wall on the west
/// side of cell column `col`. Horizontal walls sit between vertically
/// adjacent cells and are indexed by (col in 0..cols, row in 0..=rows).
///
/// Invariant after [`WallGrid::generate`]: the open (carved) edges form a
/// spanning tree over the cell graph — exactly `cols * rows - 1` open edges,
/// every cell reachable from the origin, no cycles.
#[derive(Debug, Clone)]
pub struct WallGrid {
    cols: usize,
    rows: usize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

enum Carve {
    Vertical(usize, usize),
    Horizontal(usize, usize),
}

impl WallGrid {
    /// Carves a perfect maze over `bounds` with the recursive backtracker.
    ///
    /// Every inter-cell edge starts walled. A visitation stack is seeded
    /// with the origin cell; each step either carves to a uniformly random
    /// unvisited neighbor or backtracks. The stack empties exactly when
    /// every cell has been visited, so the algorithm is total for any
    /// positive bounds and needs no retry path.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(bounds: GridSize, rng: &mut R) -> Self {
        let mut grid = Self::fully_walled(bounds);
        grid.carve(rng);
        grid
    }

    /// Creates a grid whose interior edges are all open (boundary intact).
    ///
    /// Useful as a degenerate board for movement tests and sandboxes; the
    /// spanning-tree invariant does not hold for it.
    #[must_use]
    pub fn without_walls(bounds: GridSize) -> Self {
        let mut grid = Self::fully_walled(bounds);
        for col in 1..grid.cols {
            for row in 0..grid.rows {
                let idx = grid.v_idx(col, row);
                grid.vertical[idx] = false;
            }
        }
        for col in 0..grid.cols {
            for row in 1..grid.rows {
                let idx = grid.h_idx(col, row);
                grid.horizontal[idx] = false;
            }
        }
        grid
    }

    fn fully_walled(bounds: GridSize) -> Self {
        let cols = usize::from(bounds.width);
        let rows = usize::from(bounds.height);
        Self {
            cols,
            rows,
            vertical: vec![true; (cols + 1) * rows],
            horizontal: vec![true; cols * (rows + 1)],
        }
    }

    fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut visited = vec![false; self.cols * self.rows];
        let mut stack = vec![(0usize, 0usize)];
        visited[0] = true;

        while let Some(&(x, y)) = stack.last() {
            let mut neighbors: Vec<(usize, usize, Carve)> = Vec::with_capacity(4);
            if y > 0 && !visited[self.cell_idx(x, y - 1)] {
                neighbors.push((x, y - 1, Carve::Horizontal(x, y)));
            }
            if y + 1 < self.rows && !visited[self.cell_idx(x, y + 1)] {
                neighbors.push((x, y + 1, Carve::Horizontal(x, y + 1)));
            }
            if x > 0 && !visited[self.cell_idx(x - 1, y)] {
                neighbors.push((x - 1, y, Carve::Vertical(x, y)));
            }
            if x + 1 < self.cols && !visited[self.cell_idx(x + 1, y)] {
                neighbors.push((x + 1, y, Carve::Vertical(x + 1, y)));
            }

            if neighbors.is_empty() {
                stack.pop();
                continue;
            }

            let (nx, ny, wall) = neighbors.swap_remove(rng.gen_range(0..neighbors.len()));
            match wall {
                Carve::Vertical(col, row) => {
                    let idx = self.v_idx(col, row);
                    self.vertical[idx] = false;
                }
                Carve::Horizontal(col, row) => {
                    let idx = self.h_idx(col, row);
                    self.horizontal[idx] = false;
                }
            }
            visited[self.cell_idx(nx, ny)] = true;
            stack.push((nx, ny));
        }
    }

    #[inline]
    fn cell_idx(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }

    #[inline]
    fn v_idx(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }

    #[inline]
    fn h_idx(&self, col: usize, row: usize) -> usize {
        col * (self.rows + 1) + row
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the wall on the west side of cell column `col` at `row`.
    #[must_use]
    pub fn vertical_wall(&self, col: usize, row: usize) -> bool {
        self.vertical[self.v_idx(col, row)]
    }

    /// Returns the wall on the north side of cell row `row` at `col`.
    #[must_use]
    pub fn horizontal_wall(&self, col: usize, row: usize) -> bool {
        self.horizontal[self.h_idx(col, row)]
    }

    /// Returns true when leaving `from` toward `direction` is blocked,
    /// either by the grid boundary or by a closed wall.
    #[must_use]
    pub fn blocks(&self, from: Position, direction: Direction) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(from.x), usize::try_from(from.y)) else {
            return true;
        };
        if x >= self.cols || y >= self.rows {
            return true;
        }

        match direction {
            Direction::Up => y == 0 || self.horizontal_wall(x, y),
            Direction::Down => y + 1 >= self.rows || self.horizontal_wall(x, y + 1),
            Direction::Left => x == 0 || self.vertical_wall(x, y),
            Direction::Right => x + 1 >= self.cols || self.vertical_wall(x + 1, y),
        }
    }

    /// Counts open interior edges (carved passages).
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        let mut open = 0;
        for col in 1..self.cols {
            for row in 0..self.rows {
                if !self.vertical_wall(col, row) {
                    open += 1;
                }
            }
        }
        for col in 0..self.cols {
            for row in 1..self.rows {
                if !self.horizontal_wall(col, row) {
                    open += 1;
                }
            }
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{maze_bounds, MAZE_LEVEL_COUNT};
    use crate::input::Direction;
    use crate::snake::Position;

    use super::WallGrid;

    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn reachable_cell_count(grid: &WallGrid) -> usize {
        let mut seen = vec![false; grid.cols() * grid.rows()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(Position { x: 0, y: 0 });

        while let Some(cell) = queue.pop_front() {
            for direction in DIRECTIONS {
                if grid.blocks(cell, direction) {
                    continue;
                }
                let next = cell.neighbor(direction);
                let idx = next.x as usize * grid.rows() + next.y as usize;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }

        seen.iter().filter(|reached| **reached).count()
    }

    #[test]
    fn every_tier_carves_a_spanning_tree() {
        // Edge count == cells - 1 together with full connectivity proves
        // the open-edge graph is a tree (connected and acyclic).
        for level in 1..=MAZE_LEVEL_COUNT {
            let bounds = maze_bounds(level);
            let mut rng = StdRng::seed_from_u64(u64::from(level));
            let grid = WallGrid::generate(bounds, &mut rng);

            let cells = bounds.total_cells();
            assert_eq!(grid.open_edge_count(), cells - 1, "level {level}");
            assert_eq!(reachable_cell_count(&grid), cells, "level {level}");
        }
    }

    #[test]
    fn boundary_always_blocks() {
        let bounds = maze_bounds(1);
        let mut rng = StdRng::seed_from_u64(99);
        let grid = WallGrid::generate(bounds, &mut rng);

        let last_col = i32::from(bounds.width) - 1;
        let last_row = i32::from(bounds.height) - 1;

        assert!(grid.blocks(Position { x: 0, y: 0 }, Direction::Up));
        assert!(grid.blocks(Position { x: 0, y: 0 }, Direction::Left));
        assert!(grid.blocks(
            Position {
                x: last_col,
                y: last_row
            },
            Direction::Down
        ));
        assert!(grid.blocks(
            Position {
                x: last_col,
                y: last_row
            },
            Direction::Right
        ));
    }

    #[test]
    fn out_of_bounds_cells_block_everything() {
        let grid = WallGrid::generate(maze_bounds(1), &mut StdRng::seed_from_u64(5));

        for direction in DIRECTIONS {
            assert!(grid.blocks(Position { x: -1, y: 0 }, direction));
            assert!(grid.blocks(Position { x: 0, y: 1000 }, direction));
        }
    }

    #[test]
    fn without_walls_opens_every_interior_edge() {
        let bounds = maze_bounds(1);
        let grid = WallGrid::without_walls(bounds);

        let interior_edges = (grid.cols() - 1) * grid.rows() + grid.cols() * (grid.rows() - 1);
        assert_eq!(grid.open_edge_count(), interior_edges);
        assert!(!grid.blocks(Position { x: 1, y: 1 }, Direction::Up));
        assert!(grid.blocks(Position { x: 0, y: 0 }, Direction::Left));
    }
}
