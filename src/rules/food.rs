//! Fixed starting food placement.

use super::unoccupied_points;
use crate::board::{BOARD_SIZE_MEDIUM, BoardState, Point};
use crate::error::{RulesError, RulesResult};
use rand::Rng;
use rand::seq::SliceRandom;

/// Place starting food: one near each snake, one in the centre.
///
/// Each snake gets a food on one of its diagonal neighbours, chosen
/// uniformly among those that are not the centre, not already food or
/// hazard, not a corner, and further from the centre than the head on at
/// least one axis. On small boards with more than four snakes only the
/// centre food is placed.
///
/// # Errors
///
/// Returns [`RulesError::NoRoomForFood`] if a snake has no legal diagonal
/// or the centre cell is occupied.
pub fn place_food_fixed<R: Rng + ?Sized>(rng: &mut R, board: &mut BoardState) -> RulesResult<()> {
    let center = Point::new((board.width - 1) / 2, (board.height - 1) / 2);
    let is_small_board = board.width * board.height < BOARD_SIZE_MEDIUM * BOARD_SIZE_MEDIUM;

    if board.snakes.len() <= 4 || !is_small_board {
        let heads: Vec<Point> = board.snakes.iter().filter_map(|s| s.head()).collect();
        for head in heads {
            let available: Vec<Point> = head
                .diagonals()
                .into_iter()
                .filter(|&p| p != center)
                .filter(|p| !board.food.contains(p) && !board.hazards.contains(p))
                .filter(|&p| is_away_from_center(p, head, center))
                .filter(|&p| !is_corner(board, p))
                .collect();

            let choice = *available.choose(rng).ok_or(RulesError::NoRoomForFood)?;
            board.food.push(choice);
        }
    }

    if !unoccupied_points(board, true, false).contains(&center) {
        return Err(RulesError::NoRoomForFood);
    }
    board.food.push(center);

    Ok(())
}

/// Food must lie beyond the head, seen from the centre, on some axis.
fn is_away_from_center(p: Point, head: Point, center: Point) -> bool {
    (p.x < head.x && head.x < center.x)
        || (center.x < head.x && head.x < p.x)
        || (p.y < head.y && head.y < center.y)
        || (center.y < head.y && head.y < p.y)
}

fn is_corner(board: &BoardState, p: Point) -> bool {
    (p.x == 0 || p.x == board.width - 1) && (p.y == 0 || p.y == board.height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn board_with_heads(heads: &[Point]) -> BoardState {
        let ids: Vec<String> = (0..heads.len()).map(|i| format!("s{i}")).collect();
        let mut board = BoardState::with_snakes(11, 11, &ids);
        for (snake, &head) in board.snakes.iter_mut().zip(heads) {
            snake.body = vec![head; 3];
        }
        board
    }

    #[test]
    fn test_corner_start_food_choices() {
        // From (1,1) only (0,2) and (2,0) qualify: (0,0) is a corner and
        // (2,2) points toward the centre.
        for seed in 0..50 {
            let mut board = board_with_heads(&[Point::new(1, 1)]);
            place_food_fixed(&mut SmallRng::seed_from_u64(seed), &mut board).unwrap();
            assert_eq!(board.food.len(), 2);
            assert!(
                board.food[0] == Point::new(0, 2) || board.food[0] == Point::new(2, 0),
                "unexpected food {:?}",
                board.food[0]
            );
            assert_eq!(board.food[1], Point::new(5, 5));
        }
    }

    #[test]
    fn test_no_snakes_only_center() {
        let mut board = BoardState::new(11, 11);
        place_food_fixed(&mut SmallRng::seed_from_u64(1), &mut board).unwrap();
        assert_eq!(board.food, vec![Point::new(5, 5)]);
    }

    #[test]
    fn test_blocked_diagonals() {
        let mut board = board_with_heads(&[Point::new(1, 1)]);
        board.hazards = vec![Point::new(0, 2), Point::new(2, 0)];
        let err = place_food_fixed(&mut SmallRng::seed_from_u64(1), &mut board).unwrap_err();
        assert_eq!(err, RulesError::NoRoomForFood);
    }

    #[test]
    fn test_center_occupied() {
        let mut board = board_with_heads(&[Point::new(1, 1)]);
        board.food.push(Point::new(5, 5));
        let err = place_food_fixed(&mut SmallRng::seed_from_u64(1), &mut board).unwrap_err();
        assert_eq!(err, RulesError::NoRoomForFood);
    }

    #[test]
    fn test_small_crowded_board_skips_snake_food() {
        let ids: Vec<String> = (0..5).map(|i| format!("s{i}")).collect();
        let mut board = BoardState::with_snakes(7, 7, &ids);
        let heads = [
            Point::new(1, 1),
            Point::new(1, 5),
            Point::new(5, 1),
            Point::new(5, 5),
            Point::new(1, 3),
        ];
        for (snake, &head) in board.snakes.iter_mut().zip(&heads) {
            snake.body = vec![head; 3];
        }
        place_food_fixed(&mut SmallRng::seed_from_u64(1), &mut board).unwrap();
        assert_eq!(board.food, vec![Point::new(3, 3)]);
    }
}
