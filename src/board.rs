//! Board snapshot types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health a snake starts with and is restored to by eating.
pub const SNAKE_MAX_HEALTH: i32 = 100;

/// Number of body segments a freshly placed snake has.
pub const SNAKE_START_SIZE: usize = 3;

/// Side length of a small board.
pub const BOARD_SIZE_SMALL: i32 = 7;

/// Side length of a medium board.
pub const BOARD_SIZE_MEDIUM: i32 = 11;

/// Side length of a large board.
pub const BOARD_SIZE_LARGE: i32 = 19;

/// A cell on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the bottom edge.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, unclamped.
    #[must_use]
    pub const fn neighbours(self) -> [Point; 4] {
        [
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y - 1),
            Point::new(self.x, self.y + 1),
        ]
    }

    /// The four diagonal neighbours, unclamped.
    #[must_use]
    pub const fn diagonals(self) -> [Point; 4] {
        [
            Point::new(self.x - 1, self.y - 1),
            Point::new(self.x - 1, self.y + 1),
            Point::new(self.x + 1, self.y - 1),
            Point::new(self.x + 1, self.y + 1),
        ]
    }
}

/// A snake on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Engine-assigned identifier.
    pub id: String,
    /// Body segments, head first. Empty until the snake is placed.
    pub body: Vec<Point>,
    /// Remaining health.
    pub health: i32,
}

impl Snake {
    /// Create an unplaced snake with full health.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: Vec::new(),
            health: SNAKE_MAX_HEALTH,
        }
    }

    /// The head segment, if the snake has been placed.
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

/// Immutable view of a board between turns.
///
/// `hazards` is a multiset: every occurrence of a point is one layer of
/// hazard on that cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    /// Turn counter, 0 before the first move.
    pub turn: u32,
    /// Board width in cells.
    pub width: i32,
    /// Board height in cells.
    pub height: i32,
    /// Food cells.
    pub food: Vec<Point>,
    /// Snakes in engine order.
    pub snakes: Vec<Snake>,
    /// Hazard layers, one entry per layer.
    pub hazards: Vec<Point>,
}

impl BoardState {
    /// Create an empty board of the given size at turn 0.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Create an empty board holding unplaced snakes with the given ids.
    #[must_use]
    pub fn with_snakes<S: AsRef<str>>(width: i32, height: i32, ids: &[S]) -> Self {
        let mut board = Self::new(width, height);
        board.snakes = ids.iter().map(|id| Snake::new(id.as_ref())).collect();
        board
    }

    /// Check if a point lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Iterate over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..width).flat_map(move |x| (0..height).map(move |y| Point::new(x, y)))
    }

    /// Look up a snake by id.
    #[must_use]
    pub fn snake(&self, id: &str) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Look up a snake by id for mutation.
    #[must_use]
    pub fn snake_mut(&mut self, id: &str) -> Option<&mut Snake> {
        self.snakes.iter_mut().find(|s| s.id == id)
    }

    /// Ids of all snakes in engine order.
    #[must_use]
    pub fn snake_ids(&self) -> Vec<&str> {
        self.snakes.iter().map(|s| s.id.as_str()).collect()
    }

    /// Number of hazard layers on a cell.
    #[must_use]
    pub fn hazard_depth(&self, point: Point) -> usize {
        self.hazards.iter().filter(|&&h| h == point).count()
    }

    /// Hazard layer count per hazarded cell.
    #[must_use]
    pub fn hazard_depths(&self) -> HashMap<Point, usize> {
        let mut depths = HashMap::new();
        for &point in &self.hazards {
            *depths.entry(point).or_insert(0) += 1;
        }
        depths
    }

    /// Deepest hazard stack on any cell (0 when there are no hazards).
    #[must_use]
    pub fn max_hazard_depth(&self) -> usize {
        self.hazard_depths().into_values().max().unwrap_or(0)
    }

    /// Check if a cell holds food.
    #[must_use]
    pub fn has_food(&self, point: Point) -> bool {
        self.food.contains(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_cover_board_column_major() {
        let board = BoardState::new(3, 2);
        let cells: Vec<Point> = board.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Point::new(0, 0));
        assert_eq!(cells[1], Point::new(0, 1));
        assert_eq!(cells[2], Point::new(1, 0));
    }

    #[test]
    fn test_in_bounds() {
        let board = BoardState::new(11, 11);
        assert!(board.in_bounds(Point::new(0, 0)));
        assert!(board.in_bounds(Point::new(10, 10)));
        assert!(!board.in_bounds(Point::new(-1, 0)));
        assert!(!board.in_bounds(Point::new(0, 11)));
    }

    #[test]
    fn test_hazard_depth_counts_layers() {
        let mut board = BoardState::new(11, 11);
        let p = Point::new(3, 3);
        board.hazards = vec![p, Point::new(5, 5), p, p];
        assert_eq!(board.hazard_depth(p), 3);
        assert_eq!(board.hazard_depth(Point::new(5, 5)), 1);
        assert_eq!(board.hazard_depth(Point::new(7, 7)), 0);
        assert_eq!(board.max_hazard_depth(), 3);
    }

    #[test]
    fn test_with_snakes_creates_placeholders() {
        let board = BoardState::with_snakes(11, 11, &["a", "b"]);
        assert_eq!(board.snake_ids(), vec!["a", "b"]);
        assert!(board.snakes.iter().all(|s| s.body.is_empty()));
        assert!(board.snakes.iter().all(|s| s.health == SNAKE_MAX_HEALTH));
    }

    #[test]
    fn test_board_json_round_trip() {
        let mut board = BoardState::with_snakes(11, 11, &["a"]);
        board.food.push(Point::new(5, 5));
        board.hazards.push(Point::new(3, 3));
        let json = serde_json::to_string(&board).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
