//! Placement algorithms shared by every map.
//!
//! These are the engine-side helpers maps call into: snake placement,
//! fixed food placement and the free-cell scan used by random food spawns.

mod food;

pub use food::place_food_fixed;

use crate::board::{BoardState, Point, SNAKE_START_SIZE};
use crate::error::{RulesError, RulesResult};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Replace the body of an existing snake.
///
/// # Errors
///
/// Returns [`RulesError::SnakeNotFound`] if no snake has the given id.
pub fn place_snake(board: &mut BoardState, id: &str, body: Vec<Point>) -> RulesResult<()> {
    let snake = board
        .snake_mut(id)
        .ok_or_else(|| RulesError::SnakeNotFound(id.to_string()))?;
    snake.body = body;
    Ok(())
}

/// Place every snake on the board's fixed spawn points.
///
/// Spawn points sit one cell in from the walls: four corners and four edge
/// midpoints. Both groups are shuffled and one group is randomly chosen to
/// be filled first.
///
/// # Errors
///
/// Returns [`RulesError::TooManySnakes`] for more than eight snakes.
pub fn place_snakes_fixed<R: Rng + ?Sized>(rng: &mut R, board: &mut BoardState) -> RulesResult<()> {
    let (min_x, mid_x, max_x) = (1, (board.width - 1) / 2, board.width - 2);
    let (min_y, mid_y, max_y) = (1, (board.height - 1) / 2, board.height - 2);

    let mut corners = [
        Point::new(min_x, min_y),
        Point::new(min_x, max_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
    ];
    let mut cardinals = [
        Point::new(min_x, mid_y),
        Point::new(mid_x, min_y),
        Point::new(mid_x, max_y),
        Point::new(max_x, mid_y),
    ];

    let max = corners.len() + cardinals.len();
    if board.snakes.len() > max {
        return Err(RulesError::TooManySnakes {
            snakes: board.snakes.len(),
            max,
        });
    }

    corners.shuffle(rng);
    cardinals.shuffle(rng);

    let starts: Vec<Point> = if rng.gen_range(0..2) == 0 {
        corners.iter().chain(cardinals.iter()).copied().collect()
    } else {
        cardinals.iter().chain(corners.iter()).copied().collect()
    };

    for (snake, &start) in board.snakes.iter_mut().zip(&starts) {
        snake.body = vec![start; SNAKE_START_SIZE];
    }

    Ok(())
}

/// All cells free of snakes and food, scanned column by column.
///
/// Hazard cells count as occupied unless `include_hazards` is set. Cells a
/// snake head could move into next turn count as occupied unless
/// `include_possible_moves` is set.
#[must_use]
pub fn unoccupied_points(
    board: &BoardState,
    include_possible_moves: bool,
    include_hazards: bool,
) -> Vec<Point> {
    let mut occupied: HashSet<Point> = board.food.iter().copied().collect();

    for snake in &board.snakes {
        occupied.extend(snake.body.iter().copied());
        if !include_possible_moves && let Some(head) = snake.head() {
            occupied.extend(head.neighbours());
        }
    }

    if !include_hazards {
        occupied.extend(board.hazards.iter().copied());
    }

    board.cells().filter(|p| !occupied.contains(p)).collect()
}
