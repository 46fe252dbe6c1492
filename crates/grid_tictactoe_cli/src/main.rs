//! Grid tic-tac-toe - command-line harness
//!
//! Drives the engine the way a front end would: one session value,
//! replaced after every accepted move.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use grid_tictactoe::{DEFAULT_SIZE, GameConfig, Session, winning_lines};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Replay {
            size,
            config,
            moves,
        } => run_replay(size, config, moves, &mut out),
        Command::Lines { size } => run_lines(size, &mut out),
    }
}

/// Resolves the game config from a file or a size flag.
#[instrument]
fn load_config(size: Option<usize>, path: Option<PathBuf>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::new(size.unwrap_or(DEFAULT_SIZE))?,
    };
    Ok(config)
}

/// Plays the moves in order, writing the board after each accepted one.
#[instrument(skip(moves, out), fields(moves = moves.len()))]
fn run_replay(
    size: Option<usize>,
    path: Option<PathBuf>,
    moves: Vec<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let config = load_config(size, path)?;
    let mut session = Session::new(config);
    info!(size = config.size(), "Starting replay");

    writeln!(out, "{}\n", session.board())?;
    for index in moves {
        let player = session.active_player();
        match session.play(index) {
            Ok(next) => {
                session = next;
                writeln!(out, "{player} -> {index}")?;
                writeln!(out, "{}\n", session.board())?;
            }
            Err(e) => {
                warn!(%player, index, error = %e, "Skipping rejected move");
                writeln!(out, "{player} -> {index} rejected: {e}\n")?;
            }
        }
    }

    match session.result().message() {
        Some(message) => writeln!(out, "{message}")?,
        None => writeln!(out, "Game in progress, {} to move", session.active_player())?,
    }
    Ok(())
}

/// Writes each winning line with its kind.
#[instrument(skip(out))]
fn run_lines(size: usize, out: &mut impl Write) -> Result<()> {
    let config = GameConfig::new(size)?;
    for line in winning_lines(*config.size()) {
        let indices: Vec<String> = line.indices().iter().map(|i| i.to_string()).collect();
        writeln!(out, "{:<14} [{}]", line.kind().to_string(), indices.join(", "))?;
    }
    Ok(())
}
