//! Validate command implementation.

use super::output::{JsonValidation, format_validation_text};
use super::{CliError, OutputFormat, SettingsArgs};
use indicatif::{ProgressBar, ProgressStyle};
use snakepit::GameConfig;
use snakepit::sim::validate_seeds;
use std::time::Instant;

/// Execute the validate command.
///
/// Runs one hazard pits game per seed and checks every game against the
/// map's invariants.
///
/// # Errors
///
/// Returns an error if the settings are invalid or any seed fails a check.
pub(crate) fn execute(
    settings: &SettingsArgs<'_>,
    config: &GameConfig,
    games: u64,
    threads: Option<usize>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    let settings = settings.resolve()?;
    let first_seed = settings.seed;

    // The global pool can only be sized once per process
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok();
    }

    let pb = if progress {
        let pb = ProgressBar::new(games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} seeds ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let seeds = first_seed..first_seed.saturating_add(games);
    let stats = validate_seeds(&settings, config, seeds, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            print!("{}", format_validation_text(&stats, first_seed));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let summary = JsonValidation {
                first_seed,
                clean: stats.is_clean(),
                distinct_starts: stats.start_assignments.len(),
                stats: &stats,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    if stats.is_clean() {
        Ok(())
    } else {
        Err(CliError::new(format!(
            "{} problems across {} seeds",
            stats.violations.len(),
            stats.games
        )))
    }
}
