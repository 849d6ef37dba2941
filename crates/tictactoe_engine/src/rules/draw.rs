//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|m| !m.is_empty())
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    'X' => board.place(row, col, Player::A.mark()).unwrap(),
                    'O' => board.place(row, col, Player::B.mark()).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
