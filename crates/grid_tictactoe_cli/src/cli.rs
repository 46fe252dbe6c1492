//! Command-line interface for grid-tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Grid tic-tac-toe - headless harness for the N×N game engine
#[derive(Parser, Debug)]
#[command(name = "grid-tictactoe")]
#[command(about = "Replay N×N tic-tac-toe games and inspect winning lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a list of cell indices from an empty board, X first
    Replay {
        /// Board side length
        #[arg(short, long, conflicts_with = "config")]
        size: Option<usize>,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Row-major cell indices, one per move
        moves: Vec<usize>,
    },

    /// Print the winning lines for a board size in scan order
    Lines {
        /// Board side length
        #[arg(short, long, default_value_t = grid_tictactoe::DEFAULT_SIZE)]
        size: usize,
    },
}
