//! Win detection for N×N boards.

use super::super::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Which row, column or diagonal a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `i`, counted from the top.
    #[display("row {_0}")]
    Row(usize),
    /// Column `i`, counted from the left.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// The N board indices of one potential winning line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    indices: Vec<usize>,
}

impl Line {
    /// Which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices along the line, in generation order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the player holding every cell of the line.
    pub fn is_claimed_by(&self, board: &Board) -> Option<Player> {
        let (first, rest) = self.indices.split_first()?;
        let owner = board.get(*first)?.player()?;
        rest.iter()
            .all(|&index| board.get(index).and_then(|c| c.player()) == Some(owner))
            .then_some(owner)
    }
}

/// Generates the `2 * size + 2` lines of a board with side `size`.
///
/// Order: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal. Classification scans in this order, so it is part of
/// the contract.
///
/// # Panics
///
/// Panics if `size` is zero.
#[instrument(level = "trace")]
pub fn winning_lines(size: usize) -> Vec<Line> {
    assert!(size >= 1, "board size must be at least 1, got {size}");

    let rows = (0..size).map(|i| Line {
        kind: LineKind::Row(i),
        indices: (0..size).map(|j| i * size + j).collect(),
    });
    let columns = (0..size).map(|i| Line {
        kind: LineKind::Column(i),
        indices: (0..size).map(|j| j * size + i).collect(),
    });
    let main = Line {
        kind: LineKind::MainDiagonal,
        indices: (0..size).map(|i| i * size + i).collect(),
    };
    let anti = Line {
        kind: LineKind::AntiDiagonal,
        indices: (0..size).map(|i| (i + 1) * size - (i + 1)).collect(),
    };

    rows.chain(columns).chain([main, anti]).collect()
}

/// Finds the first completed line in generation order, with its owner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    winning_lines(board.size()).into_iter().find_map(|line| {
        let owner = line.is_claimed_by(board)?;
        trace!(%owner, kind = %line.kind(), "Completed line");
        Some((owner, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in generation order.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
