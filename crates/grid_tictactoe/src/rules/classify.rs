//! Result classification.

use super::super::{Board, GameResult};
use super::{draw, win};
use tracing::{debug, instrument};

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are scanned in `winning_lines` order and the first completed one
/// decides the winner, even on crafted boards with several completed
/// lines. With no winner, a full board is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn classify(board: &Board) -> GameResult {
    if let Some(winner) = win::check_winner(board) {
        debug!(%winner, "Board won");
        return GameResult::Won(winner);
    }

    if draw::is_full(board) {
        debug!("Board full with no winner");
        return GameResult::Draw;
    }

    GameResult::InProgress
}
