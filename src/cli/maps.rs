//! Maps command implementation.

use super::output::{JsonMapInfo, format_map_text};
use super::{CliError, OutputFormat};
use snakepit::MapRegistry;

/// Execute the maps command.
///
/// Lists every registered map, or only those that can host the given
/// board and player count.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(
    filter: Option<(i32, i32, usize)>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let registry = MapRegistry::with_builtin_maps()?;
    let maps = match filter {
        Some((width, height, players)) => registry.compatible(width, height, players),
        None => registry.iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            if maps.is_empty() {
                println!("No maps match.");
            }
            for map in maps {
                println!("{}", format_map_text(map.id(), &map.meta()));
            }
        }
        OutputFormat::Json => {
            let infos: Vec<JsonMapInfo> = maps
                .iter()
                .map(|map| JsonMapInfo {
                    id: map.id(),
                    meta: map.meta(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
    }

    Ok(())
}
