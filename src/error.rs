//! Error types for board setup and per-turn map updates.

use std::fmt;

/// Failures raised by map setup, map updates and the placement helpers they call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The board dimensions are not allowed by the map.
    BoardSizeMismatch {
        /// Width of the offending board.
        width: i32,
        /// Height of the offending board.
        height: i32,
    },
    /// More snakes than the map has start positions for.
    TooManySnakes {
        /// Number of snakes requested.
        snakes: usize,
        /// Number of snakes the map can place.
        max: usize,
    },
    /// No legal cell was left for a required food placement.
    NoRoomForFood,
    /// A snake id was not present on the board.
    SnakeNotFound(String),
    /// The settings cannot drive this map.
    InvalidSettings(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardSizeMismatch { width, height } => {
                write!(f, "board size {width}x{height} is not supported by this map")
            }
            Self::TooManySnakes { snakes, max } => {
                write!(f, "too many snakes: {snakes} (maximum {max})")
            }
            Self::NoRoomForFood => write!(f, "not enough space to place food"),
            Self::SnakeNotFound(id) => write!(f, "snake not found: {id}"),
            Self::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for RulesError {}

/// Result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_display() {
        let err = RulesError::BoardSizeMismatch { width: 7, height: 7 };
        assert_eq!(err.to_string(), "board size 7x7 is not supported by this map");
    }

    #[test]
    fn test_too_many_snakes_display() {
        let err = RulesError::TooManySnakes { snakes: 5, max: 4 };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains("maximum 4"));
    }
}
