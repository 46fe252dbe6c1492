//! Grid tic-tac-toe - pure game logic for N×N boards
//!
//! The engine is a set of pure functions over immutable values. Callers
//! own the board and the active player and pass them into each call; the
//! engine never keeps state between calls.
//!
//! # Architecture
//!
//! - **Board**: flat row-major cells plus edge predicates for renderers
//! - **Rules**: move application, winning lines, result classification
//! - **Session**: caller-side bundle of board, active player and history
//! - **Invariants**: properties checked after every session move in debug builds
//!
//! # Example
//!
//! ```
//! use grid_tictactoe::{apply_move, classify, create_empty_board, toggle_player, GameResult, Player};
//!
//! let mut board = create_empty_board(3);
//! let mut player = Player::X;
//! for index in [0, 3, 1, 4, 2] {
//!     board = apply_move(&board, index, player);
//!     player = toggle_player(player);
//! }
//! assert_eq!(classify(&board), GameResult::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod edges;
mod invariants;
mod rules;
mod session;
mod types;

// Crate-level exports - Domain types
pub use types::{
    Cell, DEFAULT_SIZE, GameResult, MAX_SIZE, Player, STARTING_PLAYER, toggle_player,
};

// Crate-level exports - Board
pub use board::{Board, BoardError, create_empty_board};
pub use edges::{is_bottom_edge, is_left_edge, is_right_edge, is_top_edge};

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Rules
pub use rules::{
    Line, LineKind, apply_move, check_winner, classify, is_full, try_apply_move, winning_line,
    winning_lines,
};

// Crate-level exports - Session and configuration
pub use config::{ConfigError, GameConfig};
pub use session::Session;

// Crate-level exports - Invariants
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, SessionInvariants, SquareBoardInvariant,
};
