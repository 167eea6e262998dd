//! Game settings and seeded randomness.
//!
//! Settings are plain serde data so they can be loaded from a JSON file.
//! Every key is optional; missing keys take the defaults below.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default percentage chance of spawning food on a turn.
pub const DEFAULT_FOOD_SPAWN_CHANCE: u32 = 15;

/// Default minimum amount of food kept on the board.
pub const DEFAULT_MINIMUM_FOOD: u32 = 1;

/// Default hazard cadence in turns.
pub const DEFAULT_SHRINK_EVERY_N_TURNS: u32 = 25;

/// Settings for maps that change on a fixed cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoyaleSettings {
    /// Number of turns between hazard changes. Must be at least 1.
    pub shrink_every_n_turns: u32,
}

impl Default for RoyaleSettings {
    fn default() -> Self {
        Self {
            shrink_every_n_turns: DEFAULT_SHRINK_EVERY_N_TURNS,
        }
    }
}

/// Settings shared by every map for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game seed. All randomness is derived from it.
    pub seed: u64,
    /// Percentage chance (0-100) of spawning one food on a turn.
    pub food_spawn_chance: u32,
    /// Food count below which food is topped up every turn.
    pub minimum_food: u32,
    /// Cadence settings.
    pub royale: RoyaleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            food_spawn_chance: DEFAULT_FOOD_SPAWN_CHANCE,
            minimum_food: DEFAULT_MINIMUM_FOOD,
            royale: RoyaleSettings::default(),
        }
    }
}

impl Settings {
    /// Create default settings with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// A fresh RNG for one purpose.
    ///
    /// The stream depends only on the game seed and `purpose`, so the same
    /// pair always yields the same draws no matter what else consumed
    /// randomness before.
    #[must_use]
    pub fn rand(&self, purpose: u64) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.wrapping_add(purpose))
    }

    /// Check that the settings can drive a game.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] if the hazard cadence is zero or
    /// the food spawn chance is not a percentage.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.royale.shrink_every_n_turns == 0 {
            return Err(SettingsError::Invalid(
                "royale.shrink_every_n_turns must be at least 1".to_string(),
            ));
        }
        if self.food_spawn_chance > 100 {
            return Err(SettingsError::Invalid(format!(
                "food_spawn_chance must be 0-100, got {}",
                self.food_spawn_chance
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// invalid values.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Error loading or validating settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The settings document is not valid JSON for [`Settings`].
    Json(serde_json::Error),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read settings {}: {source}", path.display())
            }
            Self::Json(e) => write!(f, "malformed settings: {e}"),
            Self::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
