//! Tests for result classification on hand-built 3x3 boards.

use grid_tictactoe::{Board, GameResult, Player, classify};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

#[test]
fn test_full_board_without_line_is_draw() {
    // O O X / X X O / O X X
    assert_eq!(classify(&board("OOX XXO OXX")), GameResult::Draw);
}

#[test]
fn test_open_board_without_line_in_progress() {
    // O O _ / X X _ / O X X
    assert_eq!(classify(&board("OO_ XX_ OXX")), GameResult::InProgress);
}

#[test]
fn test_x_wins_with_empty_cells_left() {
    // X O _ / X X _ / O X X
    assert_eq!(classify(&board("XO_ XX_ OXX")), GameResult::Won(Player::X));
}

#[test]
fn test_x_wins_on_anti_diagonal() {
    // O O X / X X _ / X O O
    assert_eq!(classify(&board("OOX XX_ XOO")), GameResult::Won(Player::X));
}

#[test]
fn test_o_wins_middle_column() {
    // O O _ / X O _ / _ O X
    assert_eq!(classify(&board("OO_ XO_ _OX")), GameResult::Won(Player::O));
}

#[test]
fn test_o_wins_right_column() {
    // O X O / X X O / _ _ O
    assert_eq!(classify(&board("OXO XXO __O")), GameResult::Won(Player::O));
}

#[test]
fn test_classification_is_repeatable() {
    for text in ["OOX XXO OXX", "OO_ XX_ OXX", "XO_ XX_ OXX", "OXO XXO __O"] {
        let b = board(text);
        assert_eq!(classify(&b), classify(&b));
    }
}

#[test]
fn test_result_messages_for_scenarios() {
    assert_eq!(classify(&board("OOX XXO OXX")).message().as_deref(), Some("It's a draw!"));
    assert_eq!(classify(&board("OO_ XX_ OXX")).message(), None);
    assert_eq!(
        classify(&board("OO_ XO_ _OX")).message().as_deref(),
        Some("Player \"O\" won!")
    );
}
