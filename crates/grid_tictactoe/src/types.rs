//! Core domain types for grid tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used when no size is configured.
pub const DEFAULT_SIZE: usize = 3;

/// Largest side length a `GameConfig` accepts.
pub const MAX_SIZE: usize = 256;

/// Player who moves first in every new or reset game.
pub const STARTING_PLAYER: Player = Player::X;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Marker symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Hands the turn to the other player.
#[instrument(level = "trace")]
pub fn toggle_player(player: Player) -> Player {
    player.opponent()
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's marker.
    Occupied(Player),
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Outcome of classifying a board.
///
/// Always derived from a board, never tracked as separate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameResult {
    /// No completed line and at least one empty cell.
    #[display("In progress")]
    InProgress,
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(*player),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Returns true once the game has ended, by win or draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Notification text for a finished game.
    ///
    /// Games still in progress produce no message.
    pub fn message(&self) -> Option<String> {
        match self {
            GameResult::InProgress => None,
            GameResult::Draw => Some("It's a draw!".to_string()),
            GameResult::Won(player) => Some(format!("Player \"{}\" won!", player)),
        }
    }
}
