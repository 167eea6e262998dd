//! Hazard pits: a grid of pits that fill with hazard and drain on a cycle.
//!
//! Every `N = shrink_every_n_turns` turns the pits gain a layer, up to four.
//! The cycle is seven steps long:
//!
//! ```text
//! cycle position  0  1  2  3  4  5  6 | 0 ...
//! layers          0  1  2  3  4  4  4 | 0 ...
//! ```

use super::{BoardSizes, Dimensions, GameMap, MapTag, Metadata, StandardMap};
use crate::board::{BOARD_SIZE_MEDIUM, BoardState, Point, SNAKE_START_SIZE};
use crate::editor::Editor;
use crate::error::{RulesError, RulesResult};
use crate::rules::{place_food_fixed, place_snake};
use crate::settings::Settings;
use log::debug;
use rand::seq::SliceRandom;

/// Reserved snake spawns. Never hazarded.
pub const HAZARD_PIT_START_POSITIONS: [Point; 4] = [
    Point::new(1, 1),
    Point::new(9, 1),
    Point::new(1, 9),
    Point::new(9, 9),
];

/// Number of cadence steps in one fill/drain cycle.
pub const HAZARD_CYCLE_LENGTH: u32 = 7;

/// Deepest hazard stack a pit reaches.
pub const MAX_HAZARD_LAYERS: u32 = 4;

/// Hazard layer count in effect after an update at `turn`.
///
/// # Panics
///
/// Panics if `shrink_every_n_turns` is zero. [`Settings::validate`] rejects
/// such settings, and [`HazardPitsMap`] checks before calling this.
#[must_use]
pub const fn hazard_layers(turn: u32, shrink_every_n_turns: u32) -> u32 {
    let position = (turn / shrink_every_n_turns) % HAZARD_CYCLE_LENGTH;
    if position > MAX_HAZARD_LAYERS {
        MAX_HAZARD_LAYERS
    } else {
        position
    }
}

/// Cells that form the pits on a board: both coordinates odd, minus the
/// start positions.
#[must_use]
pub fn hazard_pit_cells(board: &BoardState) -> Vec<Point> {
    board
        .cells()
        .filter(|p| p.x % 2 == 1 && p.y % 2 == 1)
        .filter(|p| !HAZARD_PIT_START_POSITIONS.contains(p))
        .collect()
}

/// The hazard pits map.
#[derive(Debug, Clone, Copy, Default)]
pub struct HazardPitsMap;

impl HazardPitsMap {
    /// Map identifier.
    pub const ID: &'static str = "hz_hazard_pits";

    /// Add one hazard layer to every pit.
    fn add_hazard_pits(board: &BoardState, editor: &mut dyn Editor) {
        for point in hazard_pit_cells(board) {
            editor.add_hazard(point);
        }
    }
}

impl GameMap for HazardPitsMap {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn meta(&self) -> Metadata {
        Metadata {
            name: Self::ID,
            description: "A map that fills a grid-like pattern of squares with pits of \
                          hazard sauce. Every N turns the pits fill with another layer of \
                          sauce up to a maximum of 4 layers which last a few cycles, then \
                          the pits drain and the pattern repeats",
            author: "Battlesnake",
            version: 1,
            min_players: 1,
            max_players: HAZARD_PIT_START_POSITIONS.len(),
            board_sizes: BoardSizes::fixed(&[Dimensions::new(
                BOARD_SIZE_MEDIUM,
                BOARD_SIZE_MEDIUM,
            )]),
            tags: vec![
                MapTag::FoodPlacement,
                MapTag::HazardPlacement,
                MapTag::SnakePlacement,
            ],
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

        if initial.snakes.len() > HAZARD_PIT_START_POSITIONS.len() {
            return Err(RulesError::TooManySnakes {
                snakes: initial.snakes.len(),
                max: HAZARD_PIT_START_POSITIONS.len(),
            });
        }

        let mut rng = settings.rand(0);

        let mut starts = HAZARD_PIT_START_POSITIONS;
        starts.shuffle(&mut rng);

        // Food placement sees only the new snakes, not whatever the real
        // board already holds.
        let ids = initial.snake_ids();
        let mut scratch = BoardState::with_snakes(initial.width, initial.height, &ids);
        for (id, &head) in ids.iter().zip(&starts) {
            place_snake(&mut scratch, id, vec![head; SNAKE_START_SIZE])?;
            debug!("{}: snake {id} starts at ({}, {})", Self::ID, head.x, head.y);
        }

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
        StandardMap.update_board(last, settings, editor)?;

        let every = settings.royale.shrink_every_n_turns;
        if every == 0 {
            return Err(RulesError::InvalidSettings(
                "royale.shrink_every_n_turns must be at least 1".to_string(),
            ));
        }

        if last.turn % every == 0 {
            let layers = hazard_layers(last.turn, every);
            debug!("{}: turn {} sets {layers} hazard layers", Self::ID, last.turn);

            editor.clear_hazards();
            for _ in 0..layers {
                Self::add_hazard_pits(last, editor);
            }
        }

        Ok(())
    }
}
