//! First-class move types.
//!
//! A move is a player's intent to mark a cell. It can be validated
//! against a board independently of applying it.

use super::board::Board;
use super::rules;
use super::types::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their marker at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{player} -> {index}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the target cell.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument(level = "trace")]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the target index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Applies the move with no-op semantics on occupied cells.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside the board.
    pub fn apply(&self, board: &Board) -> Board {
        rules::apply_move(board, self.index, self.player)
    }

    /// Applies the move, reporting why it was rejected.
    pub fn try_apply(&self, board: &Board) -> Result<Board, MoveError> {
        rules::try_apply_move(board, self.index, self.player)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a cell on the board.
    #[display("Index {index} is out of bounds for a board of {len} cells")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell {index} is already occupied")]
    SquareOccupied {
        /// Requested index.
        index: usize,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition check failed after applying a move.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}
