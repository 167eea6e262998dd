//! The standard map: fixed spawns, fixed starting food, random food spawns.
//!
//! Other maps delegate their per-turn food bookkeeping here.

use super::{BoardSizes, Dimensions, GameMap, MapTag, Metadata};
use crate::board::{BOARD_SIZE_LARGE, BOARD_SIZE_MEDIUM, BOARD_SIZE_SMALL, BoardState, Point};
use crate::editor::Editor;
use crate::error::{RulesError, RulesResult};
use crate::rules::{place_food_fixed, place_snakes_fixed, unoccupied_points};
use crate::settings::Settings;
use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

/// The standard map.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMap;

impl StandardMap {
    /// Map identifier.
    pub const ID: &'static str = "standard";
}

impl GameMap for StandardMap {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn meta(&self) -> Metadata {
        Metadata {
            name: "Standard",
            description: "Standard snake placements",
            author: "Battlesnake",
            version: 1,
            min_players: 1,
            max_players: 8,
            board_sizes: BoardSizes::fixed(&[
                Dimensions::new(BOARD_SIZE_SMALL, BOARD_SIZE_SMALL),
                Dimensions::new(BOARD_SIZE_MEDIUM, BOARD_SIZE_MEDIUM),
                Dimensions::new(BOARD_SIZE_LARGE, BOARD_SIZE_LARGE),
            ]),
            tags: vec![MapTag::FoodPlacement],
        }
    }

    fn setup_board(
        &self,
        initial: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> RulesResult<()> {
        if !self
            .meta()
            .board_sizes
            .is_allowable(initial.width, initial.height)
        {
            return Err(RulesError::BoardSizeMismatch {
                width: initial.width,
                height: initial.height,
            });
        }

        let mut rng = settings.rand(0);

        let ids = initial.snake_ids();
        let mut scratch = BoardState::with_snakes(initial.width, initial.height, &ids);
        place_snakes_fixed(&mut rng, &mut scratch)?;
        place_food_fixed(&mut rng, &mut scratch)?;

        for &food in &scratch.food {
            editor.add_food(food);
        }
        for snake in scratch.snakes {
            editor.place_snake(&snake.id, snake.body, snake.health);
        }

        Ok(())
    }

    fn update_board(
        &self,
        last: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> RulesResult<()> {
        let mut rng = settings.rand(u64::from(last.turn));

        let needed = food_needed(&mut rng, settings, last);
        if needed > 0 {
            place_food_randomly(&mut rng, last, editor, needed);
        }

        Ok(())
    }
}

/// Amount of food to spawn this turn.
fn food_needed<R: Rng + ?Sized>(rng: &mut R, settings: &Settings, board: &BoardState) -> usize {
    let minimum = usize::try_from(settings.minimum_food).unwrap_or(usize::MAX);
    if board.food.len() < minimum {
        return minimum - board.food.len();
    }

    let chance = settings.food_spawn_chance;
    if chance > 0 && 100 - rng.gen_range(0..100) < chance {
        return 1;
    }

    0
}

/// Drop `n` food on randomly chosen free cells, fewer if the board is full.
fn place_food_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &BoardState,
    editor: &mut dyn Editor,
    n: usize,
) {
    let mut free: Vec<Point> = unoccupied_points(board, false, false);
    if free.len() < n {
        warn!(
            "turn {}: room for {} of {n} food",
            board.turn,
            free.len()
        );
    }

    free.shuffle(rng);
    for &point in free.iter().take(n) {
        editor.add_food(point);
    }
}
