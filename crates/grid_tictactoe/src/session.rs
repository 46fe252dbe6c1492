//! Caller-side game state.
//!
//! A `Session` bundles the board and active player a front end threads
//! between engine calls. Every operation returns a new value; the old one
//! stays valid, so a front end can swap its state wholesale.

use super::action::{Move, MoveError};
use super::config::GameConfig;
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules;
use super::types::{GameResult, Player, STARTING_PLAYER, toggle_player};
use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Board, active player and accepted moves of one game.
///
/// Deserialized sessions must satisfy `SessionInvariants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) active: Player,
    pub(crate) history: Vec<Move>,
}

/// Session fields before the invariants are checked.
#[derive(Debug, Deserialize)]
struct SessionParts {
    config: GameConfig,
    board: Board,
    active: Player,
    history: Vec<Move>,
}

impl TryFrom<SessionParts> for Session {
    type Error = MoveError;

    fn try_from(parts: SessionParts) -> Result<Self, Self::Error> {
        let session = Self {
            config: parts.config,
            board: parts.board,
            active: parts.active,
            history: parts.history,
        };
        session.check_invariants()?;
        Ok(session)
    }
}

impl Session {
    /// Starts a game on an empty board with X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(*config.size()),
            active: STARTING_PLAYER,
            history: Vec::new(),
            config,
        }
    }

    /// Plays every index in order from a fresh session.
    #[instrument(skip(indices))]
    pub fn replay(
        config: GameConfig,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, MoveError> {
        indices
            .into_iter()
            .try_fold(Self::new(config), |session, index| session.play(index))
    }

    /// Plays the active player's marker at `index`.
    ///
    /// On success the returned session holds the new board and the other
    /// player is active. Rejected moves leave `self` as the current state.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the board is won or drawn
    /// - `MoveError::OutOfBounds` for an index off the board
    /// - `MoveError::SquareOccupied` for a taken cell
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn play(&self, index: usize) -> Result<Self, MoveError> {
        if self.result().is_over() {
            debug!("Move rejected, game already over");
            return Err(MoveError::GameOver);
        }

        let action = Move::new(self.active, index);
        let board = action.try_apply(&self.board).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let mut history = self.history.clone();
        history.push(action);

        let next = Self {
            config: self.config,
            board,
            active: toggle_player(self.active),
            history,
        };

        if cfg!(debug_assertions) {
            next.check_invariants()?;
        }

        debug!(%action, result = %next.result(), "Move accepted");
        Ok(next)
    }

    /// Fresh empty board of the same size with X to move.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        Self::new(self.config)
    }

    /// Classifies the current board.
    pub fn result(&self) -> GameResult {
        rules::classify(&self.board)
    }

    /// Returns true when `player` may move right now.
    ///
    /// Front ends disable the waiting player's input, and everyone's once
    /// the game has ended.
    pub fn accepts_input(&self, player: Player) -> bool {
        player == self.active && !self.result().is_over()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is accepted next.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the configuration the session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn check_invariants(&self) -> Result<(), MoveError> {
        SessionInvariants::check_all(self).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Session invariants violated");
            MoveError::InvariantViolation { description }
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
