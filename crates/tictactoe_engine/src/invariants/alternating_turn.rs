//! Alternating turn invariant: A, B, A, B, ...

use super::super::{Player, Session, Status};
use super::Invariant;

/// Invariant: history starts with [`Session::FIRST_PLAYER`] and alternates.
///
/// While the game is in progress the player to move is the one after the last
/// mover; once it is over the last mover stays on record as active.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        let Some(first) = history.first() else {
            return session.active_player() == Session::FIRST_PLAYER
                && *session.status() == Status::InProgress;
        };
        if first.player != Session::FIRST_PLAYER {
            return false;
        }
        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let last: Player = history[history.len() - 1].player;
        match session.status() {
            Status::InProgress => session.active_player() == last.opponent(),
            Status::Over(_) => session.active_player() == last,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
