//! Mark balance invariant: X leads O by at most one, matching the turn.

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: Marker counts agree with the active player.
///
/// X moves first, so X's count equals O's when X is to move and exceeds
/// it by exactly one when O is to move.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);

        match session.active_player() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Marker counts match alternating turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    #[test]
    fn test_empty_session_holds() {
        assert!(MarkBalanceInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let session = Session::replay(GameConfig::default(), [0, 4, 2, 6, 8]).unwrap();
        assert!(MarkBalanceInvariant::holds(&session));
        assert_eq!(session.active_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::default().play(0).unwrap();
        // Hand the turn back to X without O moving
        session.active = Player::X;
        assert!(!MarkBalanceInvariant::holds(&session));
    }
}
