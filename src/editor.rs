//! Board mutation capability handed to maps.
//!
//! Maps never touch a [`BoardState`] directly. They issue edits through an
//! [`Editor`]; the engine decides when those edits land. [`EditLog`] records
//! a call's edits so they can be applied in one go after the call returns,
//! and discarded if it fails.

use crate::board::{BoardState, Point, Snake};
use log::trace;

/// Mutations a map may perform on the board.
pub trait Editor {
    /// Put a piece of food on a cell.
    fn add_food(&mut self, point: Point);

    /// Set a snake's body and health, adding the snake if it is unknown.
    fn place_snake(&mut self, id: &str, body: Vec<Point>, health: i32);

    /// Add one hazard layer on a cell.
    fn add_hazard(&mut self, point: Point);

    /// Remove every hazard layer from the board.
    fn clear_hazards(&mut self);
}

/// Applies edits immediately.
impl Editor for BoardState {
    fn add_food(&mut self, point: Point) {
        self.food.push(point);
    }

    fn place_snake(&mut self, id: &str, body: Vec<Point>, health: i32) {
        if let Some(snake) = self.snake_mut(id) {
            snake.body = body;
            snake.health = health;
        } else {
            self.snakes.push(Snake {
                id: id.to_string(),
                body,
                health,
            });
        }
    }

    fn add_hazard(&mut self, point: Point) {
        self.hazards.push(point);
    }

    fn clear_hazards(&mut self) {
        self.hazards.clear();
    }
}

/// A single recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// See [`Editor::add_food`].
    AddFood(Point),
    /// See [`Editor::place_snake`].
    PlaceSnake {
        /// Snake id.
        id: String,
        /// New body, head first.
        body: Vec<Point>,
        /// New health.
        health: i32,
    },
    /// See [`Editor::add_hazard`].
    AddHazard(Point),
    /// See [`Editor::clear_hazards`].
    ClearHazards,
}

impl Edit {
    /// Apply this edit to a board.
    pub fn apply_to(&self, board: &mut BoardState) {
        match self {
            Edit::AddFood(point) => board.add_food(*point),
            Edit::PlaceSnake { id, body, health } => board.place_snake(id, body.clone(), *health),
            Edit::AddHazard(point) => board.add_hazard(*point),
            Edit::ClearHazards => board.clear_hazards(),
        }
    }
}

/// Editor that records edits for later, atomic application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditLog {
    edits: Vec<Edit>,
}

impl EditLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded edits, oldest first.
    #[must_use]
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Number of recorded edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every recorded edit in order.
    pub fn apply(&self, board: &mut BoardState) {
        trace!("applying {} edits at turn {}", self.edits.len(), board.turn);
        for edit in &self.edits {
            edit.apply_to(board);
        }
    }
}

impl Editor for EditLog {
    fn add_food(&mut self, point: Point) {
        self.edits.push(Edit::AddFood(point));
    }

    fn place_snake(&mut self, id: &str, body: Vec<Point>, health: i32) {
        self.edits.push(Edit::PlaceSnake {
            id: id.to_string(),
            body,
            health,
        });
    }

    fn add_hazard(&mut self, point: Point) {
        self.edits.push(Edit::AddHazard(point));
    }

    fn clear_hazards(&mut self) {
        self.edits.push(Edit::ClearHazards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let mut log = EditLog::new();
        log.add_food(Point::new(1, 2));
        log.clear_hazards();
        log.add_hazard(Point::new(3, 3));
        assert_eq!(
            log.edits(),
            &[
                Edit::AddFood(Point::new(1, 2)),
                Edit::ClearHazards,
                Edit::AddHazard(Point::new(3, 3)),
            ]
        );
    }

    #[test]
    fn test_log_does_not_touch_board_until_applied() {
        let mut board = BoardState::new(11, 11);
        let mut log = EditLog::new();
        log.add_food(Point::new(5, 5));
        assert!(board.food.is_empty());

        log.apply(&mut board);
        assert_eq!(board.food, vec![Point::new(5, 5)]);
    }

    #[test]
    fn test_clear_then_add_hazards() {
        let mut board = BoardState::new(11, 11);
        board.hazards = vec![Point::new(0, 0), Point::new(1, 1)];

        let mut log = EditLog::new();
        log.clear_hazards();
        log.add_hazard(Point::new(3, 3));
        log.add_hazard(Point::new(3, 3));
        log.apply(&mut board);

        assert_eq!(board.hazards.len(), 2);
        assert_eq!(board.hazard_depth(Point::new(3, 3)), 2);
    }

    #[test]
    fn test_place_snake_replaces_existing() {
        let mut board = BoardState::with_snakes(11, 11, &["a"]);
        let body = vec![Point::new(1, 1); 3];
        board.place_snake("a", body.clone(), 90);

        let snake = board.snake("a").unwrap();
        assert_eq!(snake.body, body);
        assert_eq!(snake.health, 90);
        assert_eq!(board.snakes.len(), 1);
    }

    #[test]
    fn test_place_snake_adds_unknown() {
        let mut board = BoardState::new(11, 11);
        board.place_snake("b", vec![Point::new(9, 9)], 100);
        assert_eq!(board.snake_ids(), vec!["b"]);
    }
}
