// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Snakepit: deterministic map plugins for grid snake games.
//!
//! A map decides where snakes start, where food appears and how hazards
//! change over the course of a game. Maps never touch the board directly;
//! they read a snapshot and describe changes through an [`Editor`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Game driver / seed validation     │
//! ├─────────────────────────────────────┤
//! │   Maps (standard, hazard pits)      │
//! ├─────────────────────────────────────┤
//! │   Placement rules + board editor    │
//! └─────────────────────────────────────┘
//! ```

pub mod board;
pub mod editor;
pub mod error;
pub mod maps;
pub mod rules;
pub mod settings;
pub mod sim;

pub use board::{BoardState, Point, Snake};
pub use editor::{Edit, EditLog, Editor};
pub use error::{RulesError, RulesResult};
pub use maps::{GameMap, HazardPitsMap, MapRegistry, Metadata, StandardMap};
pub use settings::{RoyaleSettings, Settings, SettingsError};
pub use sim::{Game, GameConfig, GameOutcome, SimError, TurnReport, run_game};
