//! Multi-turn integration tests for map plugins.
//!
//! These tests drive whole games through the public API and check the
//! board the way a game engine would see it.
//!
//! Run with: cargo test --release map_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use snakepit::maps::invariants::{check_hazards, check_setup};
use snakepit::maps::{HAZARD_PIT_START_POSITIONS, MapTag, hazard_layers, hazard_pit_cells};
use snakepit::{
    BoardState, EditLog, Game, GameConfig, GameMap, HazardPitsMap, MapRegistry, Point, Settings,
    SimError, run_game,
};

fn settings(seed: u64, every: u32) -> Settings {
    let mut settings = Settings::with_seed(seed);
    settings.royale.shrink_every_n_turns = every;
    settings
}

#[test]
fn test_registry_serves_hazard_pits() {
    let registry = MapRegistry::with_builtin_maps().unwrap();
    let map = registry.get("hz_hazard_pits").unwrap();
    let meta = map.meta();

    assert_eq!(meta.max_players, 4);
    assert!(meta.has_tag(MapTag::HazardPlacement));
    assert!(meta.supports(11, 11, 1));
    assert!(!meta.supports(11, 11, 0));
}

#[test]
fn test_full_game_through_registry() {
    let registry = MapRegistry::with_builtin_maps().unwrap();
    let map = registry.get("hz_hazard_pits").unwrap();
    let config = GameConfig {
        turns: 200,
        ..GameConfig::default()
    };

    let outcome = run_game(map, settings(31, 20), &config).unwrap();
    assert!(check_setup(&outcome.initial).is_empty());
    assert!(check_hazards(&outcome.board).is_empty());
    assert_eq!(outcome.board.turn, 200);

    // Snakes never move, so the start assignment survives the whole game.
    assert_eq!(outcome.initial.snakes, outcome.board.snakes);
}

#[test]
fn test_pits_fill_and_drain() {
    let mut game = Game::new(&HazardPitsMap, settings(5, 10), &GameConfig::default()).unwrap();

    let mut depths = Vec::new();
    for _ in 0..=150 {
        let report = game.step().unwrap();
        if report.turn % 10 == 0 {
            depths.push(report.hazard_layers);
        }
    }

    assert_eq!(
        depths,
        vec![0, 1, 2, 3, 4, 4, 4, 0, 1, 2, 3, 4, 4, 4, 0, 1]
    );
}

#[test]
fn test_layers_hold_between_updates() {
    let mut game = Game::new(&HazardPitsMap, settings(8, 6), &GameConfig::default()).unwrap();
    let mut hazards: Option<Vec<Point>> = None;

    for _ in 0..60 {
        let before = game.board().clone();
        let report = game.step().unwrap();
        if report.turn % 6 == 0 {
            let expected = hazard_layers(report.turn, 6) as usize;
            assert_eq!(report.hazard_layers, expected);
            hazards = Some(game.board().hazards.clone());
        } else {
            assert_eq!(before.hazards, game.board().hazards);
            assert_eq!(Some(&game.board().hazards), hazards.as_ref());
        }
    }
}

#[test]
fn test_start_positions_stay_clear() {
    let outcome = run_game(&HazardPitsMap, settings(2, 1), &GameConfig::default()).unwrap();
    for report in &outcome.reports {
        assert!(report.hazard_cells <= 21);
    }
    for start in HAZARD_PIT_START_POSITIONS {
        assert_eq!(outcome.board.hazard_depth(start), 0);
    }
}

#[test]
fn test_pit_pattern_is_fixed() {
    let board = BoardState::new(11, 11);
    let pits = hazard_pit_cells(&board);
    assert_eq!(pits.first(), Some(&Point::new(1, 3)));
    assert_eq!(pits.last(), Some(&Point::new(9, 7)));
    assert_eq!(pits.len(), 21);
}

#[test]
fn test_fewer_players_use_subset_of_starts() {
    for players in 1..=3 {
        let config = GameConfig {
            players,
            turns: 0,
            ..GameConfig::default()
        };
        let outcome = run_game(&HazardPitsMap, Settings::with_seed(12), &config).unwrap();
        assert_eq!(outcome.initial.snakes.len(), players);
        assert!(check_setup(&outcome.initial).is_empty());
        assert_eq!(outcome.initial.food.len(), players + 1);
    }
}

#[test]
fn test_setup_failure_leaves_no_game() {
    let config = GameConfig {
        width: 13,
        height: 13,
        ..GameConfig::default()
    };
    let err = run_game(&HazardPitsMap, Settings::default(), &config).unwrap_err();
    assert!(matches!(err, SimError::Setup(_)));
}

#[test]
fn test_update_sees_previous_snapshot() {
    let mut board = BoardState::with_snakes(11, 11, &["a", "b"]);
    let settings = settings(3, 4);

    let mut log = EditLog::new();
    HazardPitsMap.setup_board(&board, &settings, &mut log).unwrap();
    log.apply(&mut board);

    // Edits are recorded, not applied, while the update runs.
    board.turn = 4;
    let mut log = EditLog::new();
    HazardPitsMap.update_board(&board, &settings, &mut log).unwrap();
    assert!(board.hazards.is_empty());
    assert!(!log.is_empty());

    log.apply(&mut board);
    assert_eq!(board.max_hazard_depth(), 1);
}
