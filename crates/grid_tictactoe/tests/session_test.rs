//! Tests for driving full games through a session.

use grid_tictactoe::{
    Board, Cell, GameConfig, GameResult, Move, MoveError, Player, Session, apply_move, classify,
    create_empty_board, toggle_player,
};

#[test]
fn test_engine_call_sequence_matches_session() {
    let indices = [4, 0, 8, 2, 1, 7, 6, 3, 5];

    let mut board = create_empty_board(3);
    let mut player = Player::X;
    for index in indices {
        board = apply_move(&board, index, player);
        player = toggle_player(player);
    }

    let session = Session::replay(GameConfig::default(), indices).unwrap();
    assert_eq!(session.board(), &board);
    assert_eq!(session.active_player(), player);
    assert_eq!(session.result(), classify(&board));
}

#[test]
fn test_full_game_to_draw() {
    // X O X / X O O / O X X
    let session = Session::replay(GameConfig::default(), [0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(session.result(), GameResult::Draw);
    assert_eq!(session.history().len(), 9);
    assert_eq!(session.play(0), Err(MoveError::GameOver));
}

#[test]
fn test_o_wins_on_4x4_column() {
    let config = GameConfig::new(4).unwrap();
    let session = Session::replay(config, [0, 1, 2, 5, 3, 9, 4, 13]).unwrap();
    assert_eq!(session.result(), GameResult::Won(Player::O));
    assert_eq!(
        session.result().message().as_deref(),
        Some("Player \"O\" won!")
    );
}

#[test]
fn test_rejected_move_keeps_previous_state() {
    let session = Session::default().play(4).unwrap();
    let retried = session.play(4);
    assert_eq!(retried, Err(MoveError::SquareOccupied { index: 4 }));
    assert_eq!(session.history(), &[Move::new(Player::X, 4)]);

    let next = session.play(0).unwrap();
    assert_eq!(next.board().get(0), Some(Cell::Occupied(Player::O)));
}

#[test]
fn test_reset_after_game_over() {
    let won = Session::replay(GameConfig::default(), [0, 3, 1, 4, 2]).unwrap();
    assert!(won.result().is_over());

    let fresh = won.reset();
    assert_eq!(fresh.board(), &Board::new(3));
    assert_eq!(fresh.active_player(), Player::X);
    assert!(fresh.accepts_input(Player::X));
}

#[test]
fn test_board_serializes_as_flat_cells() {
    let board = apply_move(&Board::new(2), 3, Player::O);
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"["Empty","Empty","Empty",{"Occupied":"O"}]"#);

    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_board_deserialize_rejects_non_square() {
    let result: Result<Board, _> = serde_json::from_str(r#"["Empty","Empty","Empty"]"#);
    assert!(result.is_err());
}
