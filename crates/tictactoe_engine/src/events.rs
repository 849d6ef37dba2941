//! Lifecycle events emitted by the session for presentation collaborators.

use super::types::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Something observable happened to a session.
///
/// A move yields `MoveApplied` and, when it ends the game, `GameOver` right
/// after it. Rejected moves yield nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A player claimed a cell.
    MoveApplied {
        /// Claimed row.
        row: usize,
        /// Claimed column.
        col: usize,
        /// Player who claimed it.
        player: Player,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// How it ended.
        outcome: Outcome,
    },
    /// The session was returned to a fresh game.
    Reset,
}

impl SessionEvent {
    /// Returns the outcome carried by a `GameOver` event.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SessionEvent::GameOver { outcome } => Some(*outcome),
            _ => None,
        }
    }
}
