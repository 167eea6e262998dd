//! Run command implementation.

use super::output::format_game_text;
use super::{CliError, OutputFormat, SettingsArgs};
use snakepit::{GameConfig, MapRegistry, run_game};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the map is unknown, the settings are invalid or the
/// game fails.
pub(crate) fn execute(
    map_id: &str,
    settings: &SettingsArgs<'_>,
    config: &GameConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let registry = MapRegistry::with_builtin_maps()?;
    let map = registry.get(map_id)?;
    let settings = settings.resolve()?;

    if !quiet && format == OutputFormat::Text {
        println!(
            "Running {} on {}x{} with {} snakes for {} turns...",
            map.id(),
            config.width,
            config.height,
            config.players,
            config.turns
        );
        println!();
    }

    let outcome = run_game(map, settings, config)?;

    match format {
        OutputFormat::Text => print!("{}", format_game_text(&outcome, !quiet)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}
