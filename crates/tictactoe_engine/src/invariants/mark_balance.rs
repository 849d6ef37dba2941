//! Mark balance invariant: A never trails B, and leads by at most one.

use super::super::{Player, Session};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: `count(A) - count(B)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let counts: Vec<usize> = Player::iter()
            .map(|player| {
                session
                    .board()
                    .cells()
                    .iter()
                    .filter(|m| m.owner() == Some(player))
                    .count()
            })
            .collect();
        let (a, b) = (counts[0], counts[1]);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Mark counts stay balanced (A leads by at most one)"
    }
}
