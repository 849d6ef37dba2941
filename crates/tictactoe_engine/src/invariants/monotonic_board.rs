//! Monotonic board invariant: cells never change once claimed.

use super::super::{Board, Session};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, with every move landing on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut reconstructed = Board::new();
        for mov in session.history() {
            if reconstructed
                .place(mov.row, mov.col, mov.player.mark())
                .is_err()
            {
                return false;
            }
        }
        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
