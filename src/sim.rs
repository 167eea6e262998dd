//! Game driver for map plugins.
//!
//! Provides a pure function interface: `(map, settings, config) -> GameOutcome`
//!
//! The driver plays the engine's part of the map contract:
//! - Builds the empty board and runs setup once
//! - Runs the map's update once per turn on the previous snapshot
//! - Applies each call's edits atomically, discarding them on error
//!
//! Snakes never move; only the map's own changes are simulated.

mod validate;

pub use validate::{ValidationStats, validate_seeds};

use crate::board::{BOARD_SIZE_MEDIUM, BoardState};
use crate::editor::{Edit, EditLog};
use crate::error::RulesError;
use crate::maps::GameMap;
use crate::settings::{Settings, SettingsError};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Default number of turns to simulate.
pub const DEFAULT_TURNS: u32 = 175;

/// Shape of a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width.
    pub width: i32,
    /// Board height.
    pub height: i32,
    /// Number of snakes.
    pub players: usize,
    /// Turns to simulate after setup.
    pub turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_SIZE_MEDIUM,
            height: BOARD_SIZE_MEDIUM,
            players: 4,
            turns: DEFAULT_TURNS,
        }
    }
}

/// What a single update did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Turn of the snapshot the update ran on.
    pub turn: u32,
    /// Whether the update touched hazards.
    pub hazards_changed: bool,
    /// Distinct hazarded cells after the update.
    pub hazard_cells: usize,
    /// Deepest hazard stack after the update.
    pub hazard_layers: usize,
    /// Food on the board after the update.
    pub food: usize,
    /// Edits the update recorded.
    pub edits: usize,
}

/// Final result of a simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    /// Map that was played.
    pub map: &'static str,
    /// Seed used for this game.
    pub seed: u64,
    /// Board right after setup.
    pub initial: BoardState,
    /// Board after the last turn.
    pub board: BoardState,
    /// One report per simulated turn.
    pub reports: Vec<TurnReport>,
}

/// Error type for driver operations.
#[derive(Debug)]
pub enum SimError {
    /// The settings were rejected before the game started.
    Settings(SettingsError),
    /// The map refused or failed setup.
    Setup(RulesError),
    /// The map failed during a turn update.
    Update {
        /// Turn of the snapshot the update ran on.
        turn: u32,
        /// Error returned by the map.
        source: RulesError,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(e) => write!(f, "{e}"),
            Self::Setup(e) => write!(f, "setup failed: {e}"),
            Self::Update { turn, source } => write!(f, "update failed at turn {turn}: {source}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Settings(e) => Some(e),
            Self::Setup(e) | Self::Update { source: e, .. } => Some(e),
        }
    }
}

impl From<SettingsError> for SimError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

/// A game in progress on one map.
#[derive(Debug)]
pub struct Game<'m> {
    map: &'m dyn GameMap,
    settings: Settings,
    board: BoardState,
}

impl<'m> Game<'m> {
    /// Set up a new game.
    ///
    /// Snakes are named `snake-1` .. `snake-N`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the map rejects the
    /// board. No board exists after an error.
    pub fn new(
        map: &'m dyn GameMap,
        settings: Settings,
        config: &GameConfig,
    ) -> Result<Self, SimError> {
        settings.validate()?;

        let ids: Vec<String> = (1..=config.players).map(|i| format!("snake-{i}")).collect();
        let mut board = BoardState::with_snakes(config.width, config.height, &ids);

        let mut log = EditLog::new();
        map.setup_board(&board, &settings, &mut log).map_err(SimError::Setup)?;
        log.apply(&mut board);

        debug!(
            "{}: set up {}x{} board for {} snakes with seed {}",
            map.id(),
            config.width,
            config.height,
            config.players,
            settings.seed
        );

        Ok(Self {
            map,
            settings,
            board,
        })
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The map being played.
    #[must_use]
    pub fn map(&self) -> &'m dyn GameMap {
        self.map
    }

    /// Run one turn of map updates and advance the turn counter.
    ///
    /// # Errors
    ///
    /// Returns the map's error; the board is left untouched in that case.
    pub fn step(&mut self) -> Result<TurnReport, SimError> {
        let turn = self.board.turn;

        let mut log = EditLog::new();
        self.map
            .update_board(&self.board, &self.settings, &mut log)
            .map_err(|source| SimError::Update { turn, source })?;

        let hazards_changed = log
            .edits()
            .iter()
            .any(|edit| matches!(edit, Edit::ClearHazards | Edit::AddHazard(_)));
        log.apply(&mut self.board);
        self.board.turn += 1;

        Ok(TurnReport {
            turn,
            hazards_changed,
            hazard_cells: self.board.hazard_depths().len(),
            hazard_layers: self.board.max_hazard_depth(),
            food: self.board.food.len(),
            edits: log.len(),
        })
    }

    /// Consume the game, returning the final board.
    #[must_use]
    pub fn into_board(self) -> BoardState {
        self.board
    }
}

/// Set up a game and run it for `config.turns` turns.
///
/// # Errors
///
/// Returns an error if setup or any update fails.
pub fn run_game(
    map: &dyn GameMap,
    settings: Settings,
    config: &GameConfig,
) -> Result<GameOutcome, SimError> {
    let mut game = Game::new(map, settings, config)?;
    let initial = game.board().clone();

    let mut reports = Vec::with_capacity(config.turns as usize);
    for _ in 0..config.turns {
        reports.push(game.step()?);
    }

    Ok(GameOutcome {
        map: map.id(),
        seed: settings.seed,
        initial,
        board: game.into_board(),
        reports,
    })
}
