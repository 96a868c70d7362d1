use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates (column, row).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the adjacent cell in `direction`, unbounded.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Ordered snake body, head at the front.
///
/// The session owns move legality and collision policy; this type only
/// mutates the segment list.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn single(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Inserts `new_head` at the front; drops the tail unless growing.
    pub fn advance(&mut self, new_head: Position, grows: bool) {
        self.body.push_front(new_head);
        if !grows {
            let _ = self.body.pop_back();
        }
    }

    /// Replaces the entire body with a single head cell (maze movement).
    pub fn become_head(&mut self, new_head: Position) {
        self.body.clear();
        self.body.push_front(new_head);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn neighbor_steps_one_cell() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.neighbor(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.neighbor(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.neighbor(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.neighbor(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn advance_keeps_length_without_growth() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
        ]);

        snake.advance(Position { x: 6, y: 5 }, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
        ]);

        snake.advance(Position { x: 6, y: 5 }, true);

        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(Position { x: 4, y: 5 }));
    }

    #[test]
    fn become_head_collapses_body_to_one_cell() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]);

        snake.become_head(Position { x: 3, y: 2 });

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 3, y: 2 });
    }
}
