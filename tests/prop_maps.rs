//! Property-based tests for map setup and the hazard cycle.
//!
//! Run with: cargo test --release prop_maps

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::collections::HashSet;

use snakepit::maps::invariants::{check_hazards, check_setup};
use snakepit::maps::{
    HAZARD_CYCLE_LENGTH, HAZARD_PIT_START_POSITIONS, MAX_HAZARD_LAYERS, hazard_layers,
};
use snakepit::{BoardState, EditLog, GameMap, HazardPitsMap, RulesError, Settings};

fn board(width: i32, height: i32, players: usize) -> BoardState {
    let ids: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
    BoardState::with_snakes(width, height, &ids)
}

fn setup(players: usize, seed: u64) -> BoardState {
    let ids: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
    let mut board = BoardState::with_snakes(11, 11, &ids);
    let mut log = EditLog::new();
    HazardPitsMap
        .setup_board(&board, &Settings::with_seed(seed), &mut log)
        .unwrap();
    log.apply(&mut board);
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Layer count follows the clamped seven-step cycle for any cadence.
    #[test]
    fn prop_layers_formula(turn in 0u32..1_000_000, every in 1u32..500) {
        let layers = hazard_layers(turn, every);
        let position = (turn / every) % HAZARD_CYCLE_LENGTH;
        prop_assert!(layers <= MAX_HAZARD_LAYERS);
        prop_assert_eq!(layers, position.min(MAX_HAZARD_LAYERS));
    }

    /// Setup is a pure function of the seed.
    #[test]
    fn prop_setup_deterministic(seed in any::<u64>(), players in 0usize..=4) {
        prop_assert_eq!(setup(players, seed), setup(players, seed));
    }

    /// Every snake gets its own start position.
    #[test]
    fn prop_heads_distinct(seed in any::<u64>(), players in 1usize..=4) {
        let board = setup(players, seed);
        let heads: HashSet<_> = board.snakes.iter().filter_map(|s| s.head()).collect();
        prop_assert_eq!(heads.len(), players);
        prop_assert!(check_setup(&board).is_empty());
    }

    /// Updates on cadence produce a well-formed pit pattern with no start
    /// position ever hazarded.
    #[test]
    fn prop_update_hazards_well_formed(
        seed in any::<u64>(),
        every in 1u32..50,
        step in 0u32..20,
    ) {
        let mut settings = Settings::with_seed(seed);
        settings.royale.shrink_every_n_turns = every;

        let mut board = setup(4, seed);
        board.turn = step * every;
        let mut log = EditLog::new();
        HazardPitsMap.update_board(&board, &settings, &mut log).unwrap();
        log.apply(&mut board);

        prop_assert!(check_hazards(&board).is_empty());
        for start in HAZARD_PIT_START_POSITIONS {
            prop_assert_eq!(board.hazard_depth(start), 0);
        }
        prop_assert_eq!(
            board.max_hazard_depth(),
            hazard_layers(step * every, every) as usize
        );
    }

    /// Any board other than 11x11 is refused before a single edit is issued.
    #[test]
    fn prop_setup_rejects_other_sizes(
        width in 1i32..30,
        height in 1i32..30,
        players in 0usize..=4,
        seed in any::<u64>(),
    ) {
        prop_assume!((width, height) != (11, 11));
        let initial = board(width, height, players);
        let mut log = EditLog::new();

        let err = HazardPitsMap
            .setup_board(&initial, &Settings::with_seed(seed), &mut log)
            .unwrap_err();
        prop_assert_eq!(err, RulesError::BoardSizeMismatch { width, height });
        prop_assert!(log.is_empty());
    }

    /// More snakes than start positions is refused with nothing recorded.
    #[test]
    fn prop_setup_rejects_extra_snakes(players in 5usize..=16, seed in any::<u64>()) {
        let initial = board(11, 11, players);
        let mut log = EditLog::new();

        let err = HazardPitsMap
            .setup_board(&initial, &Settings::with_seed(seed), &mut log)
            .unwrap_err();
        prop_assert_eq!(
            err,
            RulesError::TooManySnakes {
                snakes: players,
                max: HAZARD_PIT_START_POSITIONS.len(),
            }
        );
        prop_assert!(log.is_empty());
    }
}
