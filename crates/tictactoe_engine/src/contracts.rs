//! Contract-based validation for session moves.
//!
//! Preconditions decide whether a move is accepted at all; postconditions
//! confirm that an accepted move kept the session invariants.

use super::action::{Move, MoveError};
use super::board::BOARD_SIZE;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::session::Session;
use super::types::Status;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session has not reached an outcome.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects with [`MoveError::GameAlreadyOver`].
    #[instrument(skip(session))]
    pub fn check(_mov: &Move, session: &Session) -> Result<(), MoveError> {
        match session.status() {
            Status::InProgress => Ok(()),
            Status::Over(_) => Err(MoveError::GameAlreadyOver),
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects with [`MoveError::NotYourTurn`].
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        if mov.player != session.active_player() {
            Err(MoveError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinates lie on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects with [`MoveError::InvalidMove`].
    #[instrument(skip(_session))]
    pub fn check(mov: &Move, _session: &Session) -> Result<(), MoveError> {
        if mov.row < BOARD_SIZE && mov.col < BOARD_SIZE {
            Ok(())
        } else {
            Err(MoveError::InvalidMove {
                row: mov.row,
                col: mov.col,
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`].
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        match session.board().get(mov.row, mov.col) {
            Some(mark) if mark.is_empty() => Ok(()),
            Some(_) => Err(MoveError::CellOccupied {
                row: mov.row,
                col: mov.col,
            }),
            None => Err(MoveError::InvalidMove {
                row: mov.row,
                col: mov.col,
            }),
        }
    }
}

/// Composite precondition, checked in order: game in progress, player's
/// turn, cell on the board, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &Session) -> Result<(), MoveError> {
        GameInProgress::check(mov, session)?;
        PlayersTurn::check(mov, session)?;
        CellOnBoard::check(mov, session)?;
        CellIsEmpty::check(mov, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move contract
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions: exactly one more cell is marked and one more move is on
/// record, and all [`SessionInvariants`] hold.
pub struct MoveContract;

impl Contract<Session, Move> for MoveContract {
    fn pre(session: &Session, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &Session, after: &Session) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if after.board().marked_count() != before.board().marked_count() + 1 {
            violations.push(InvariantViolation::new("Exactly one cell is claimed per move"));
        }
        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("Exactly one move is recorded per move"));
        }
        if let Err(mut failed) = SessionInvariants::check_all(after) {
            violations.append(&mut failed);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, PlayerNames};

    fn session() -> Session {
        Session::new(PlayerNames::default())
    }

    #[test]
    fn test_precondition_empty_square() {
        let session = session();
        assert!(MoveContract::pre(&session, &Move::new(Player::A, 1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut session = session();
        session.apply_move(Player::A, 1, 1).unwrap();
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Player::B, 1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = session();
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Player::B, 1, 1)),
            Err(MoveError::NotYourTurn(Player::B))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let session = session();
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Player::A, 0, 3)),
            Err(MoveError::InvalidMove { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_game_over_checked_before_turn() {
        let mut session = session();
        for (player, row, col) in [
            (Player::A, 0, 0),
            (Player::B, 1, 0),
            (Player::A, 0, 1),
            (Player::B, 1, 1),
            (Player::A, 0, 2),
        ] {
            session.apply_move(player, row, col).unwrap();
        }
        assert_eq!(
            MoveContract::pre(&session, &Move::new(Player::B, 2, 2)),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_turn_checked_before_bounds() {
        let mut session = session();
        let before = session.clone();
        assert_eq!(
            session.apply_move(Player::B, 5, 5),
            Err(MoveError::NotYourTurn(Player::B))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_turn_checked_before_occupancy() {
        let mut session = session();
        session.apply_move(Player::A, 0, 0).unwrap();
        session.apply_move(Player::B, 1, 1).unwrap();
        let before = session.clone();
        assert_eq!(
            session.apply_move(Player::B, 0, 0),
            Err(MoveError::NotYourTurn(Player::B))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = session();
        let mut after = before.clone();
        after.apply_move(Player::A, 2, 1).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = session();
        let mut after = before.clone();
        after.apply_move(Player::A, 2, 1).unwrap();
        after.board.place(0, 0, Player::B.mark()).unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
