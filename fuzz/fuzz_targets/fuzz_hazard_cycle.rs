#![no_main]

//! Hazard pits game fuzzer.
//!
//! Plays a whole game from fuzzer-chosen settings and board shape, then
//! checks the map's invariants:
//! 1. Setup either fails cleanly or places every snake on a start
//! 2. Every on-cadence update sets the expected layer count
//! 3. The final board has a well-formed pit pattern

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snakepit::maps::hazard_layers;
use snakepit::maps::invariants::{check_hazards, check_setup};
use snakepit::{GameConfig, HazardPitsMap, Settings, run_game};

#[derive(Arbitrary, Debug)]
struct Input {
    seed: u64,
    shrink_every: u8,
    food_chance: u8,
    minimum_food: u8,
    players: u8,
    turns: u8,
    odd_board: bool,
}

fuzz_target!(|input: Input| {
    let mut settings = Settings::with_seed(input.seed);
    settings.royale.shrink_every_n_turns = u32::from(input.shrink_every).max(1);
    settings.food_spawn_chance = u32::from(input.food_chance % 101);
    settings.minimum_food = u32::from(input.minimum_food % 8);

    let side = if input.odd_board { 11 } else { 9 };
    let config = GameConfig {
        width: side,
        height: side,
        players: usize::from(input.players % 8),
        turns: u32::from(input.turns),
    };

    let Ok(outcome) = run_game(&HazardPitsMap, settings, &config) else {
        assert!(side != 11 || config.players > 4);
        return;
    };

    assert!(check_setup(&outcome.initial).is_empty());
    assert!(check_hazards(&outcome.board).is_empty());

    let every = settings.royale.shrink_every_n_turns;
    for report in &outcome.reports {
        if report.turn % every == 0 {
            assert_eq!(report.hazard_layers, hazard_layers(report.turn, every) as usize);
        }
    }
});
