//! History consistency invariant: accepted moves match the board.

use super::super::{Cell, Session};
use super::Invariant;

/// Invariant: Every recorded move is still on the board.
///
/// Each history entry's cell holds that entry's player, and the number
/// of occupied cells equals the number of recorded moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let history = session.history();

        let recorded = history
            .iter()
            .all(|m| board.get(m.index) == Some(Cell::Occupied(m.player)));
        let occupied = board.cells().iter().filter(|c| !c.is_empty()).count();

        recorded && occupied == history.len()
    }

    fn description() -> &'static str {
        "Move history matches occupied cells"
    }
}
