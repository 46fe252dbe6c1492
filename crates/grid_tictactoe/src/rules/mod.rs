//! Game rules for grid tic-tac-toe.
//!
//! Pure functions over boards. Nothing here keeps state between calls;
//! callers thread the board and active player themselves.

pub mod classify;
pub mod draw;
pub mod moves;
pub mod win;

pub use classify::classify;
pub use draw::is_full;
pub use moves::{apply_move, try_apply_move};
pub use win::{Line, LineKind, check_winner, winning_line, winning_lines};
