//! Flat row-major board storage.

use super::types::{Cell, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// N×N board stored as N² cells in row-major order.
///
/// Index `row * size + col` addresses a cell. The cell count is always
/// `size * size` and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    /// Side length N.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

/// Errors building a board from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Boards need at least one cell per side.
    #[display("Board size must be at least 1")]
    ZeroSize,
    /// The cell count has no integer square root.
    #[display("{len} cells do not form a square board")]
    NotSquare {
        /// Number of cells supplied.
        len: usize,
    },
    /// Board text contained a character that is not a marker.
    #[display("Unknown cell symbol {symbol:?}")]
    InvalidSymbol {
        /// Offending character.
        symbol: char,
    },
}

/// Creates an empty board with `size` cells per side.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn create_empty_board(size: usize) -> Board {
    Board::new(size)
}

impl Board {
    /// Creates an empty board with `size` cells per side.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` overflows `usize`.
    #[instrument(level = "trace")]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1, got {size}");
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("board size {size} overflows the cell count"));
        Self {
            size,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Creates an empty board, rejecting a zero size.
    #[instrument(level = "trace")]
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self::new(size))
    }

    /// Builds a board from row-major cells, deriving the side length.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BoardError> {
        let len = cells.len();
        if len == 0 {
            return Err(BoardError::ZeroSize);
        }
        let size = len.isqrt();
        if size * size != len {
            return Err(BoardError::NotSquare { len });
        }
        Ok(Self { size, cells })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Boards are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of empty cells, ascending.
    pub fn vacancies(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `player`'s marker.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with one cell replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        next.cells[index] = cell;
        next
    }

    /// Overwrites a cell in place.
    #[cfg(test)]
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::types::DEFAULT_SIZE)
    }
}

impl std::fmt::Display for Board {
    /// Rows separated by rules; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.len().to_string().len();
        let rule = vec!["-".repeat(width); self.size].join("+");
        for (row, chunk) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                let index = row * self.size + col;
                match cell {
                    Cell::Empty => write!(f, "{:>width$}", index + 1)?,
                    Cell::Occupied(player) => write!(f, "{:>width$}", player.symbol())?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses `X`, `O`, and `_` or `.` for empty cells.
    ///
    /// Whitespace, `|` and `,` are treated as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Occupied(Player::X)),
                'O' | 'o' => Ok(Cell::Occupied(Player::O)),
                '_' | '.' => Ok(Cell::Empty),
                other => Err(BoardError::InvalidSymbol { symbol: other }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for size in 1..=6 {
            let board = create_empty_board(size);
            assert_eq!(board.size(), size);
            assert_eq!(board.len(), size * size);
            assert!(board.cells().iter().all(|c| c.is_empty()));
        }
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_size_panics() {
        let _ = Board::new(0);
    }

    #[test]
    #[should_panic(expected = "overflows the cell count")]
    fn test_overflowing_size_panics() {
        let _ = Board::new(usize::MAX);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(Board::try_new(0), Err(BoardError::ZeroSize));
        assert!(Board::try_new(4).is_ok());
    }

    #[test]
    fn test_from_cells_requires_square() {
        assert_eq!(
            Board::from_cells(vec![Cell::Empty; 8]),
            Err(BoardError::NotSquare { len: 8 })
        );
        assert_eq!(Board::from_cells(Vec::new()), Err(BoardError::ZeroSize));
        assert_eq!(Board::from_cells(vec![Cell::Empty; 16]).map(|b| b.size()), Ok(4));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO_ _X. O_X".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(1), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(2), Some(Cell::Empty));
        assert_eq!(board.vacancies(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            "XOZ______".parse::<Board>(),
            Err(BoardError::InvalidSymbol { symbol: 'Z' })
        );
    }

    #[test]
    fn test_display_classic_layout() {
        let board: Board = "X_O ___ __X".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|X");
    }

    #[test]
    fn test_display_pads_wide_boards() {
        let board = Board::new(4);
        let text = board.to_string();
        assert!(text.starts_with(" 1| 2| 3| 4\n--+--+--+--\n"));
        assert!(text.ends_with("13|14|15|16"));
    }

    #[test]
    fn test_count_and_with_cell() {
        let board = Board::new(3);
        let next = board.with_cell(4, Cell::Occupied(Player::X));
        assert_eq!(board.count(Player::X), 0);
        assert_eq!(next.count(Player::X), 1);
        assert!(!next.is_vacant(4));
        assert!(!next.is_vacant(9));
    }
}
