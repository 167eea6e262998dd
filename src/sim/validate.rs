//! Many-seed sweep over the hazard pits map.
//!
//! Each seed is a full game checked against the map's invariants. Seeds run
//! in parallel; each rayon worker folds into its own [`ValidationStats`] and
//! the partial results are merged at the end.

use super::{GameConfig, SimError, run_game};
use crate::board::Point;
use crate::maps::invariants::{check_hazards, check_setup};
use crate::maps::{HazardPitsMap, hazard_layers};
use crate::settings::Settings;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Range;

/// Aggregated results of a seed sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    /// Games simulated.
    pub games: u64,
    /// Games that returned an error instead of finishing.
    pub failures: u64,
    /// Every violation found, prefixed with its seed.
    pub violations: Vec<String>,
    /// Distinct start position orders seen across seeds.
    pub start_assignments: BTreeSet<Vec<Point>>,
}

impl ValidationStats {
    /// Check whether the sweep found nothing wrong.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures == 0 && self.violations.is_empty()
    }

    /// Merge another worker's results into this one.
    pub fn merge(&mut self, other: Self) {
        self.games += other.games;
        self.failures += other.failures;
        self.violations.extend(other.violations);
        self.start_assignments.extend(other.start_assignments);
    }

    fn record(&mut self, seed: u64, settings: &Settings, config: &GameConfig) {
        self.games += 1;
        let settings = Settings { seed, ..*settings };

        let outcome = match run_game(&HazardPitsMap, settings, config) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.failures += 1;
                self.violations.push(format!("seed {seed}: {e}"));
                return;
            }
        };

        for v in check_setup(&outcome.initial) {
            self.violations.push(format!("seed {seed} setup: {}", v.message));
        }

        let every = settings.royale.shrink_every_n_turns;
        for report in &outcome.reports {
            if report.turn % every == 0 {
                let expected = hazard_layers(report.turn, every) as usize;
                if report.hazard_layers != expected {
                    self.violations.push(format!(
                        "seed {seed} turn {}: {} hazard layers, expected {expected}",
                        report.turn, report.hazard_layers
                    ));
                }
            }
        }

        for v in check_hazards(&outcome.board) {
            self.violations.push(format!("seed {seed} final: {}", v.message));
        }

        let setup_only = GameConfig { turns: 0, ..*config };
        match run_game(&HazardPitsMap, settings, &setup_only) {
            Ok(replay) if replay.initial == outcome.initial => {}
            Ok(_) => {
                self.violations
                    .push(format!("seed {seed}: setup is not deterministic"));
            }
            Err(e) => self.violations.push(format!("seed {seed} replay: {e}")),
        }

        let heads: Vec<Point> = outcome.initial.snakes.iter().filter_map(|s| s.head()).collect();
        self.start_assignments.insert(heads);
    }
}

/// Simulate one hazard pits game per seed and check every invariant.
///
/// `on_game` is called after each finished game, from whichever worker
/// thread ran it.
///
/// # Errors
///
/// Returns [`SimError::Settings`] if the settings are invalid; nothing is
/// simulated in that case. Per-game failures are recorded in the stats.
pub fn validate_seeds<F>(
    settings: &Settings,
    config: &GameConfig,
    seeds: Range<u64>,
    on_game: F,
) -> Result<ValidationStats, SimError>
where
    F: Fn() + Sync,
{
    settings.validate()?;

    let stats = seeds
        .into_par_iter()
        .fold(ValidationStats::default, |mut local, seed| {
            local.record(seed, settings, config);
            on_game();
            local
        })
        .reduce(ValidationStats::default, |mut a, b| {
            a.merge(b);
            a
        });

    Ok(stats)
}
