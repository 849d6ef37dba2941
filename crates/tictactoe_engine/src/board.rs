//! The game grid and its single mutation, `place`.

use super::rules;
use super::types::{Mark, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Coordinates lie outside the grid.
    #[display("Cell ({row}, {col}) is not on the board")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for BoardError {}

/// Square tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(row * BOARD_SIZE + col)
    }

    /// Gets the mark at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Claims an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMove`] for coordinates off the board (or an
    /// attempt to place [`Mark::Empty`]) and [`BoardError::CellOccupied`] when
    /// the cell is taken. The board is untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), BoardError> {
        let idx = Self::index(row, col).ok_or(BoardError::InvalidMove { row, col })?;
        if mark.is_empty() {
            return Err(BoardError::InvalidMove { row, col });
        }
        if !self.cells[idx].is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[idx] = mark;
        debug!(row, col, ?mark, "Mark placed");
        Ok(())
    }

    /// Scans rows, then columns, then diagonals for a completed line.
    pub fn check_win(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks only the lines passing through `(row, col)`.
    pub fn wins_through(&self, row: usize, col: usize) -> Option<Player> {
        rules::winner_through(self, row, col)
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(idx, _)| (idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                let rule = vec!["-"; BOARD_SIZE].join("+");
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark.owner() {
                    Some(player) => player.symbol().to_string(),
                    None => (row * BOARD_SIZE + col + 1).to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
