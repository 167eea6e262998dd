//! Snakepit CLI - inspect, run and validate snake game maps.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Args as ClapArgs, Parser, Subcommand};
use snakepit::GameConfig;
use snakepit::board::BOARD_SIZE_MEDIUM;
use snakepit::sim::DEFAULT_TURNS;
use std::path::PathBuf;
use std::process::ExitCode;

/// Snakepit - deterministic maps for grid snake games
#[derive(Parser, Debug)]
#[command(name = "snakepit")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by commands that play games.
#[derive(ClapArgs, Debug)]
struct GameArgs {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Random seed (default: from settings file, else random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turns between hazard changes
    #[arg(short = 'n', long)]
    shrink_every: Option<u32>,

    /// Percentage chance of spawning food each turn
    #[arg(long)]
    food_chance: Option<u32>,

    /// Board width
    #[arg(long, default_value_t = BOARD_SIZE_MEDIUM)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = BOARD_SIZE_MEDIUM)]
    height: i32,

    /// Number of snakes
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Turns to simulate after setup
    #[arg(short, long, default_value_t = DEFAULT_TURNS)]
    turns: u32,
}

impl GameArgs {
    fn settings(&self) -> cli::SettingsArgs<'_> {
        cli::SettingsArgs {
            file: self.settings.as_deref(),
            seed: self.seed,
            shrink_every: self.shrink_every,
            food_chance: self.food_chance,
        }
    }

    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            players: self.players,
            turns: self.turns,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List available maps
    Maps {
        /// Only maps that fit this board and player count, as WxH:P
        #[arg(long, value_parser = parse_fit)]
        fits: Option<(i32, i32, usize)>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Set up and simulate a single game on one map
    Run {
        /// Map id
        #[arg(short, long, default_value = "hz_hazard_pits")]
        map: String,

        #[command(flatten)]
        game: GameArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check hazard pits invariants over many seeds in parallel
    Validate {
        #[command(flatten)]
        game: GameArgs,

        /// Number of seeds to check, starting at the seed
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },
}

/// Parse a `WxH:P` board filter.
fn parse_fit(s: &str) -> Result<(i32, i32, usize), String> {
    let err = || format!("expected WxH:P, got {s:?}");
    let (size, players) = s.split_once(':').ok_or_else(err)?;
    let (width, height) = size.split_once('x').ok_or_else(err)?;
    Ok((
        width.parse().map_err(|_| err())?,
        height.parse().map_err(|_| err())?,
        players.parse().map_err(|_| err())?,
    ))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Maps { fits, format } => cli::maps::execute(fits, format),

        Commands::Run {
            map,
            game,
            format,
            quiet,
        } => cli::run::execute(&map, &game.settings(), &game.config(), format, quiet),

        Commands::Validate {
            game,
            games,
            threads,
            format,
            progress,
        } => cli::validate::execute(
            &game.settings(),
            &game.config(),
            games,
            threads,
            format,
            progress,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fit() {
        assert_eq!(parse_fit("11x11:4"), Ok((11, 11, 4)));
        assert!(parse_fit("11x11").is_err());
        assert!(parse_fit("11:4").is_err());
        assert!(parse_fit("ax11:4").is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
