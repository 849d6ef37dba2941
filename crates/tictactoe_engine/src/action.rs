//! First-class move requests and their rejections.
//!
//! A move is the player's intent. It is validated against the session before
//! anything changes, so a rejected move has no effect at all.

use super::board::BoardError;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player claiming the cell at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Target row, zero-indexed.
    pub row: usize,
    /// Target column, zero-indexed.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Reasons a move is rejected. The session is unchanged after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are outside the grid.
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

    /// The mover is not the player whose turn it is.
    #[display("It's not {:?}'s turn", _0)]
    NotYourTurn(Player),

    /// The game has reached a win or a draw.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidMove { row, col } => MoveError::InvalidMove { row, col },
            BoardError::CellOccupied { row, col } => MoveError::CellOccupied { row, col },
        }
    }
}
