//! Square board invariant: the cell count is always N².

use super::super::{Board, Session};
use super::Invariant;

/// Invariant: A board of side N holds exactly N² cells.
///
/// For sessions the board side must also match the configured size.
pub struct SquareBoardInvariant;

impl Invariant<Board> for SquareBoardInvariant {
    fn holds(board: &Board) -> bool {
        board.size() >= 1 && board.len() == board.size() * board.size()
    }

    fn description() -> &'static str {
        "Board holds exactly N² cells"
    }
}

impl Invariant<Session> for SquareBoardInvariant {
    fn holds(session: &Session) -> bool {
        <Self as Invariant<Board>>::holds(session.board())
            && session.board().size() == *session.config().size()
    }

    fn description() -> &'static str {
        "Session board holds exactly N² cells for the configured N"
    }
}
