//! Output formatting utilities for CLI.

use serde::Serialize;
use snakepit::maps::{BoardSizes, Metadata};
use snakepit::sim::ValidationStats;
use snakepit::{BoardState, GameOutcome, Point};
use std::fmt::Write;

/// JSON-serializable map listing entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonMapInfo {
    /// Map id.
    pub(super) id: &'static str,
    /// Map metadata.
    #[serde(flatten)]
    pub(super) meta: Metadata,
}

/// JSON-serializable validation summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonValidation<'a> {
    /// First seed checked.
    pub(super) first_seed: u64,
    /// Whether every seed passed.
    pub(super) clean: bool,
    /// Number of distinct start assignments observed.
    pub(super) distinct_starts: usize,
    /// Raw sweep results.
    #[serde(flatten)]
    pub(super) stats: &'a ValidationStats,
}

/// Describe supported board sizes in words.
fn format_sizes(sizes: &BoardSizes) -> String {
    match sizes {
        BoardSizes::Fixed { sizes } => sizes
            .iter()
            .map(|d| format!("{}x{}", d.width, d.height))
            .collect::<Vec<_>>()
            .join(", "),
        BoardSizes::Odd { min, max } => format!("odd sides {min}-{max}"),
        BoardSizes::Any => "any".to_string(),
    }
}

/// Format one map's metadata as human-readable text.
pub(super) fn format_map_text(id: &str, meta: &Metadata) -> String {
    let mut output = String::new();
    let tags: Vec<String> = meta.tags.iter().map(ToString::to_string).collect();

    let _ = writeln!(output, "{id} ({} v{})", meta.name, meta.version);
    let _ = writeln!(output, "  {}", meta.description);
    let _ = writeln!(output, "  Author:  {}", meta.author);
    let _ = writeln!(
        output,
        "  Players: {}-{}",
        meta.min_players, meta.max_players
    );
    let _ = writeln!(output, "  Boards:  {}", format_sizes(&meta.board_sizes));
    let _ = writeln!(output, "  Tags:    {}", tags.join(", "));

    output
}

/// Render a board as a character grid, top row first.
///
/// Snakes are letters, food is `o`, hazards show their depth and empty
/// cells are `.`.
pub(super) fn render_board(board: &BoardState) -> String {
    let mut output = String::new();
    let depths = board.hazard_depths();

    for y in (0..board.height).rev() {
        for x in 0..board.width {
            let point = Point::new(x, y);
            let snake = board
                .snakes
                .iter()
                .position(|s| s.body.contains(&point));

            let cell = if let Some(index) = snake {
                snake_letter(index)
            } else if board.has_food(point) {
                'o'
            } else if let Some(&depth) = depths.get(&point) {
                char::from_digit(u32::try_from(depth).unwrap_or(9).min(9), 10).unwrap_or('#')
            } else {
                '.'
            };
            output.push(cell);
            output.push(' ');
        }
        output.pop();
        output.push('\n');
    }

    output
}

fn snake_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

/// Format a finished game as human-readable text.
pub(super) fn format_game_text(outcome: &GameOutcome, show_turns: bool) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Map: {} (seed: {})", outcome.map, outcome.seed);
    let _ = writeln!(output, "Turns: {}", outcome.reports.len());
    let _ = writeln!(output);

    for (index, snake) in outcome.initial.snakes.iter().enumerate() {
        match snake.head() {
            Some(head) => {
                let _ = writeln!(
                    output,
                    "  {} {}: starts at ({}, {})",
                    snake_letter(index),
                    snake.id,
                    head.x,
                    head.y
                );
            }
            None => {
                let _ = writeln!(output, "  {} {}: not placed", snake_letter(index), snake.id);
            }
        }
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Initial board:");
    output.push_str(&render_board(&outcome.initial));

    if show_turns {
        let _ = writeln!(output);
        for report in outcome.reports.iter().filter(|r| r.hazards_changed) {
            let _ = writeln!(
                output,
                "  turn {:>4}: {} layers on {} cells, {} food",
                report.turn, report.hazard_layers, report.hazard_cells, report.food
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Final board (turn {}):", outcome.board.turn);
    output.push_str(&render_board(&outcome.board));

    output
}

/// Format a seed sweep as human-readable text.
pub(super) fn format_validation_text(stats: &ValidationStats, first_seed: u64) -> String {
    let mut output = String::new();
    let last_seed = first_seed.saturating_add(stats.games.saturating_sub(1));

    let _ = writeln!(output, "Seeds:     {first_seed}..={last_seed}");
    let _ = writeln!(output, "Games:     {}", stats.games);
    let _ = writeln!(output, "Failures:  {}", stats.failures);
    let _ = writeln!(output, "Starts:    {} distinct", stats.start_assignments.len());
    let _ = writeln!(output, "Problems:  {}", stats.violations.len());

    for violation in stats.violations.iter().take(20) {
        let _ = writeln!(output, "  {violation}");
    }
    if stats.violations.len() > 20 {
        let _ = writeln!(output, "  ... {} more", stats.violations.len() - 20);
    }

    output
}
