use super::{MoveError, PlayerId};
use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Pieces in a line needed to win; also the smallest playable dimension.
pub const RUN_LENGTH: usize = 4;
pub const MIN_DIMENSION: usize = RUN_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A `rows x cols` grid stored row-major. Row 0 is the top, row `rows - 1`
/// is the bottom where pieces land first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board, rejecting dimensions that cannot hold a run.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(ConfigError::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
            });
        }

        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a position, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Signed lookup used by the win scan; anything off the grid is `None`.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Row a piece dropped into `col` would land on: the highest-indexed
    /// empty row.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.cols + col] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty board with the same dimensions.
    pub fn cleared(&self) -> Board {
        Board {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Empty; self.rows * self.cols],
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Build a board from text rows, top row first: `X` is player one,
    /// `O` player two, anything else empty. Ignores gravity.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &[&str]) -> Board {
        let rows = pattern.len();
        let cols = pattern[0].len();
        let mut board = Board::new(rows, cols).unwrap();
        for (row, line) in pattern.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row * cols + col] = match ch {
                    'X' => Cell::Occupied(PlayerId::One),
                    'O' => Cell::Occupied(PlayerId::Two),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}
