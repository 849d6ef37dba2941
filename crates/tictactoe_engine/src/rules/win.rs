//! Win detection logic for tic-tac-toe.

use super::super::board::BOARD_SIZE;
use super::super::{Board, Player};
use tracing::instrument;

/// Coordinates `(row, col)` of one row, column or diagonal.
pub type Line = [(usize, usize); BOARD_SIZE];

fn row_line(row: usize) -> Line {
    std::array::from_fn(|col| (row, col))
}

fn column_line(col: usize) -> Line {
    std::array::from_fn(|row| (row, col))
}

fn diagonal() -> Line {
    std::array::from_fn(|i| (i, i))
}

fn anti_diagonal() -> Line {
    std::array::from_fn(|i| (i, BOARD_SIZE - 1 - i))
}

/// All `2N + 2` lines: rows first, then columns, then the two diagonals.
pub fn lines() -> impl Iterator<Item = Line> {
    (0..BOARD_SIZE)
        .map(row_line)
        .chain((0..BOARD_SIZE).map(column_line))
        .chain([diagonal(), anti_diagonal()])
}

/// The lines that pass through `(row, col)`, in the same order as [`lines`].
pub fn lines_through(row: usize, col: usize) -> Vec<Line> {
    let mut through = vec![row_line(row), column_line(col)];
    if row == col {
        through.push(diagonal());
    }
    if row + col == BOARD_SIZE - 1 {
        through.push(anti_diagonal());
    }
    through
}

/// Owner of `line` if every cell in it carries the same mark.
fn line_winner(board: &Board, line: &Line) -> Option<Player> {
    let (row, col) = line[0];
    let first = board.get(row, col)?;
    let player = first.owner()?;
    line.iter()
        .all(|&(r, c)| board.get(r, c) == Some(first))
        .then_some(player)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line found, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    lines().find_map(|line| line_winner(board, &line))
}

/// Checks only the lines through `(row, col)`.
///
/// Only these lines can become complete when that cell is claimed, so after
/// a placement this agrees with [`check_winner`] on any board that had no
/// winner before it. Coordinates off the board yield `None`.
#[instrument]
pub fn winner_through(board: &Board, row: usize, col: usize) -> Option<Player> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    lines_through(row, col)
        .iter()
        .find_map(|line| line_winner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            board.place(row, col, player.mark()).unwrap();
        }
    }

    #[test]
    fn test_line_count() {
        assert_eq!(lines().count(), 2 * BOARD_SIZE + 2);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for player in [Player::A, Player::B] {
            for line in lines() {
                let mut board = Board::new();
                claim(&mut board, player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
                for &(row, col) in &line {
                    assert_eq!(winner_through(&board, row, col), Some(player));
                }
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        claim(&mut board, Player::A, &[(0, 0), (0, 1)]);
        claim(&mut board, Player::B, &[(0, 2)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        claim(&mut board, Player::A, &[(0, 0), (1, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_through_corner_center_and_edge() {
        assert_eq!(lines_through(0, 0).len(), 3);
        assert_eq!(lines_through(1, 1).len(), 4);
        assert_eq!(lines_through(0, 1).len(), 2);
        assert_eq!(lines_through(2, 0).len(), 3);
    }

    #[test]
    fn test_winner_through_ignores_distant_lines() {
        let mut board = Board::new();
        claim(&mut board, Player::B, &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(winner_through(&board, 0, 1), None);
        assert_eq!(winner_through(&board, 2, 1), Some(Player::B));
    }

    #[test]
    fn test_winner_through_off_board() {
        assert_eq!(winner_through(&Board::new(), 5, 0), None);
    }
}
