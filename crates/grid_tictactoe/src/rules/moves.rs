//! Move application.

use super::super::action::MoveError;
use super::super::{Board, Cell, Player};
use tracing::{debug, instrument};

/// Places `player`'s marker at `index`, returning the next board.
///
/// An occupied target leaves the board as it was: the returned board
/// equals the input and no error is raised. The input is never modified.
///
/// # Panics
///
/// Panics if `index` is not below `board.len()`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Board {
    match board.get(index) {
        Some(Cell::Empty) => board.with_cell(index, Cell::Occupied(player)),
        Some(Cell::Occupied(holder)) => {
            debug!(?holder, "Cell already taken, board unchanged");
            board.clone()
        }
        None => panic!(
            "move index {index} out of bounds for a board of {} cells",
            board.len()
        ),
    }
}

/// Places `player`'s marker at `index`, reporting rejected moves.
///
/// Use this for untrusted input where an out-of-range index must not
/// panic and an occupied cell should be surfaced to the caller.
#[instrument(skip(board), fields(size = board.size()))]
pub fn try_apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    match board.get(index) {
        Some(Cell::Empty) => Ok(board.with_cell(index, Cell::Occupied(player))),
        Some(Cell::Occupied(_)) => Err(MoveError::SquareOccupied { index }),
        None => Err(MoveError::OutOfBounds {
            index,
            len: board.len(),
        }),
    }
}
