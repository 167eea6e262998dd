//! CLI command implementations for Snakepit.

pub(crate) mod maps;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use snakepit::Settings;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

impl From<snakepit::SettingsError> for CliError {
    fn from(e: snakepit::SettingsError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snakepit::SimError> for CliError {
    fn from(e: snakepit::SimError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snakepit::maps::RegistryError> for CliError {
    fn from(e: snakepit::maps::RegistryError) -> Self {
        Self::new(e.to_string())
    }
}

/// Settings overrides accepted on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SettingsArgs<'a> {
    /// JSON settings file to start from.
    pub(crate) file: Option<&'a Path>,
    /// Game seed.
    pub(crate) seed: Option<u64>,
    /// Hazard cadence override.
    pub(crate) shrink_every: Option<u32>,
    /// Food spawn chance override.
    pub(crate) food_chance: Option<u32>,
}

impl SettingsArgs<'_> {
    /// Build settings from the file (or defaults) plus any overrides.
    ///
    /// A missing seed is taken from the clock.
    pub(crate) fn resolve(&self) -> Result<Settings, CliError> {
        let mut settings = match self.file {
            Some(path) => Settings::from_json_file(path)?,
            None => Settings::default(),
        };

        if let Some(n) = self.shrink_every {
            settings.royale.shrink_every_n_turns = n;
        }
        if let Some(chance) = self.food_chance {
            settings.food_spawn_chance = chance;
        }
        settings.seed = match (self.seed, self.file) {
            (Some(seed), _) => seed,
            (None, Some(_)) => settings.seed,
            (None, None) => clock_seed(),
        };

        settings.validate()?;
        Ok(settings)
    }
}

/// Seed derived from the current time.
pub(crate) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(42, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let args = SettingsArgs {
            file: Some(&path),
            ..SettingsArgs::default()
        };

        let err = args.resolve().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("failed to read settings"), "{message}");
        assert!(message.contains("absent.json"), "{message}");
    }

    #[test]
    fn test_resolve_overrides() {
        let args = SettingsArgs {
            seed: Some(7),
            shrink_every: Some(3),
            food_chance: Some(0),
            ..SettingsArgs::default()
        };

        let settings = args.resolve().unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.royale.shrink_every_n_turns, 3);
        assert_eq!(settings.food_spawn_chance, 0);
    }

    #[test]
    fn test_resolve_rejects_zero_cadence() {
        let args = SettingsArgs {
            seed: Some(1),
            shrink_every: Some(0),
            ..SettingsArgs::default()
        };

        assert!(args.resolve().is_err());
    }
}
