//! Map plugins.
//!
//! A map decides where snakes and food start and how the board changes
//! between turns. Maps are stateless: every call receives the previous
//! snapshot, the game settings and an [`Editor`] to record changes into.
//!
//! ```text
//! MapRegistry ──get(id)──▶ &dyn GameMap
//!                              │
//!          setup_board(turn 0) │ update_board(every turn)
//!                              ▼
//!                          Editor ──▶ engine applies edits
//! ```

mod hazard_pits;
pub mod invariants;
mod registry;
mod standard;

pub use hazard_pits::{
    HAZARD_CYCLE_LENGTH, HAZARD_PIT_START_POSITIONS, HazardPitsMap, MAX_HAZARD_LAYERS,
    hazard_layers, hazard_pit_cells,
};
pub use registry::{MapRegistry, RegistryError};
pub use standard::StandardMap;

use crate::board::BoardState;
use crate::editor::Editor;
use crate::error::RulesResult;
use crate::settings::Settings;
use serde::Serialize;
use std::fmt;

/// Capabilities a map advertises to the selection logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapTag {
    /// The map decides where food goes.
    FoodPlacement,
    /// The map decides where hazards go.
    HazardPlacement,
    /// The map decides where snakes start.
    SnakePlacement,
}

impl fmt::Display for MapTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapTag::FoodPlacement => write!(f, "food_placement"),
            MapTag::HazardPlacement => write!(f, "hazard_placement"),
            MapTag::SnakePlacement => write!(f, "snake_placement"),
        }
    }
}

/// Board width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Board sizes a map can be played on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardSizes {
    /// Only the listed sizes.
    Fixed {
        /// Allowed sizes.
        sizes: Vec<Dimensions>,
    },
    /// Any odd width and height within `min..=max`.
    Odd {
        /// Smallest allowed side.
        min: i32,
        /// Largest allowed side.
        max: i32,
    },
    /// Any positive size.
    Any,
}

impl BoardSizes {
    /// Allow only the given sizes.
    #[must_use]
    pub fn fixed(sizes: &[Dimensions]) -> Self {
        Self::Fixed {
            sizes: sizes.to_vec(),
        }
    }

    /// Check if a board of the given size is allowed.
    #[must_use]
    pub fn is_allowable(&self, width: i32, height: i32) -> bool {
        match self {
            Self::Fixed { sizes } => sizes.contains(&Dimensions::new(width, height)),
            Self::Odd { min, max } => [width, height]
                .into_iter()
                .all(|side| side % 2 == 1 && (*min..=*max).contains(&side)),
            Self::Any => width > 0 && height > 0,
        }
    }
}

/// Static description of a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Display name.
    pub name: &'static str,
    /// What the map does.
    pub description: &'static str,
    /// Who wrote it.
    pub author: &'static str,
    /// Revision of the map's behaviour.
    pub version: u32,
    /// Fewest snakes the map supports.
    pub min_players: usize,
    /// Most snakes the map supports.
    pub max_players: usize,
    /// Supported board sizes.
    pub board_sizes: BoardSizes,
    /// Advertised capabilities.
    pub tags: Vec<MapTag>,
}

impl Metadata {
    /// Check if a game of this size and player count can use the map.
    #[must_use]
    pub fn supports(&self, width: i32, height: i32, players: usize) -> bool {
        self.board_sizes.is_allowable(width, height)
            && (self.min_players..=self.max_players).contains(&players)
    }

    /// Check if the map advertises a capability.
    #[must_use]
    pub fn has_tag(&self, tag: MapTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// A board generator and evolver.
pub trait GameMap: fmt::Debug + Send + Sync {
    /// Unique identifier used for lookup.
    fn id(&self) -> &'static str;

    /// Static metadata.
    fn meta(&self) -> Metadata;

    /// Populate an empty board at game start.
    ///
    /// `initial` holds the board size and unplaced snakes.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot host this map or placement fails.
    /// No edits should be considered valid after an error.
    fn setup_board(
        &self,
        initial: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> RulesResult<()>;

    /// Record this turn's board changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot drive the map.
    fn update_board(
        &self,
        last: &BoardState,
        settings: &Settings,
        editor: &mut dyn Editor,
    ) -> RulesResult<()>;
}
