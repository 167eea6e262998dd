//! Hazard pits invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger on a board produced by
//! [`HazardPitsMap`](super::HazardPitsMap). If they do, setup or the
//! hazard cycle is broken.

use super::{HAZARD_PIT_START_POSITIONS, MAX_HAZARD_LAYERS, hazard_pit_cells};
use crate::board::{BoardState, SNAKE_MAX_HEALTH, SNAKE_START_SIZE};
use std::collections::HashSet;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check a freshly set-up board.
///
/// Every snake must be placed on its own start position with a stacked
/// three-segment body and full health, and no hazards may exist yet.
#[must_use]
pub fn check_setup(board: &BoardState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if board.snakes.len() > HAZARD_PIT_START_POSITIONS.len() {
        violations.push(violation(format!(
            "{} snakes exceed {} start positions",
            board.snakes.len(),
            HAZARD_PIT_START_POSITIONS.len()
        )));
    }

    let mut heads = HashSet::new();
    for snake in &board.snakes {
        let Some(head) = snake.head() else {
            violations.push(violation(format!("Snake {} was never placed", snake.id)));
            continue;
        };

        if !HAZARD_PIT_START_POSITIONS.contains(&head) {
            violations.push(violation(format!(
                "Snake {} starts at {head:?}, not a start position",
                snake.id
            )));
        }
        if !heads.insert(head) {
            violations.push(violation(format!(
                "Snake {} shares start {head:?} with another snake",
                snake.id
            )));
        }
        if snake.body.len() != SNAKE_START_SIZE || snake.body.iter().any(|&p| p != head) {
            violations.push(violation(format!(
                "Snake {} body {:?} is not {SNAKE_START_SIZE} stacked segments",
                snake.id, snake.body
            )));
        }
        if snake.health != SNAKE_MAX_HEALTH {
            violations.push(violation(format!(
                "Snake {} starts with health {}",
                snake.id, snake.health
            )));
        }
    }

    if !board.hazards.is_empty() {
        violations.push(violation(format!(
            "{} hazards present at setup",
            board.hazards.len()
        )));
    }

    violations
}

/// Check the hazard layer structure of a board.
///
/// Hazards may only sit on pit cells, every pit carries the same number
/// of layers, and that number never exceeds the maximum.
#[must_use]
pub fn check_hazards(board: &BoardState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let pits: HashSet<_> = hazard_pit_cells(board).into_iter().collect();
    let depths = board.hazard_depths();

    for (point, depth) in &depths {
        if HAZARD_PIT_START_POSITIONS.contains(point) {
            violations.push(violation(format!(
                "Start position {point:?} has {depth} hazard layers"
            )));
        } else if !pits.contains(point) {
            violations.push(violation(format!(
                "Hazard at {point:?} is outside the pit pattern"
            )));
        }
    }

    let max = board.max_hazard_depth();
    if max > MAX_HAZARD_LAYERS as usize {
        violations.push(violation(format!(
            "Hazard depth {max} exceeds {MAX_HAZARD_LAYERS} layers"
        )));
    }

    if max > 0 {
        for pit in &pits {
            let depth = depths.get(pit).copied().unwrap_or(0);
            if depth != max {
                violations.push(violation(format!(
                    "Pit {pit:?} has {depth} layers, expected {max}"
                )));
            }
        }
    }

    violations
}
