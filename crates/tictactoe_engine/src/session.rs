//! Game session controller: turn order, lifecycle status and events.

use super::action::{Move, MoveError};
use super::board::Board;
use super::contracts::{Contract, MoveContract};
use super::events::SessionEvent;
use super::types::{Mark, Outcome, Player, PlayerNames, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game between two named players.
///
/// The session is the only writer of its board. Every rejected call leaves
/// it exactly as it was; accepted moves return the events they caused.
///
/// Deserializing reads only the names and the move history and replays the
/// moves, so the board, turn and status are always rebuilt from legal play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) names: PlayerNames,
    pub(crate) to_move: Player,
    pub(crate) status: Status,
    pub(crate) history: Vec<Move>,
}

/// Serialized form accepted back: who played and what they played.
#[derive(Deserialize)]
struct SessionRecord {
    names: PlayerNames,
    #[serde(default)]
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = MoveError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        Session::replay(record.names, &record.history)
    }
}

impl Session {
    /// Player who moves first, at start and after every reset.
    pub const FIRST_PLAYER: Player = Player::A;

    /// Starts a fresh game between the named players.
    #[instrument]
    pub fn new(names: PlayerNames) -> Self {
        info!(
            player_a = names.name(Player::A),
            player_b = names.name(Player::B),
            "Starting session"
        );
        Self {
            board: Board::new(),
            names,
            to_move: Self::FIRST_PLAYER,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Applies `player`'s claim of `(row, col)`.
    ///
    /// Returns `MoveApplied`, followed by `GameOver` when the move completes
    /// a line or fills the board. The winner is the owner of the completed
    /// line, i.e. the mover.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`MoveError::GameAlreadyOver`],
    /// [`MoveError::NotYourTurn`], [`MoveError::InvalidMove`],
    /// [`MoveError::CellOccupied`]. No state changes and no events on error.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply_move(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Vec<SessionEvent>, MoveError> {
        let action = Move::new(player, row, col);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(row, col, player.mark())?;
        self.history.push(action);
        let mut events = vec![SessionEvent::MoveApplied { row, col, player }];

        let winner = self.board.wins_through(row, col);
        debug_assert_eq!(winner, self.board.check_win());

        if let Some(winner) = winner {
            self.status = Status::Over(Outcome::Win(winner));
        } else if self.board.is_full() {
            self.status = Status::Over(Outcome::Draw);
        } else {
            self.to_move = player.opponent();
        }

        #[cfg(debug_assertions)]
        self.check_postconditions(&before);

        match self.status {
            Status::Over(outcome) => {
                info!(?outcome, moves = self.history.len(), "Game over");
                events.push(SessionEvent::GameOver { outcome });
            }
            Status::InProgress => {
                debug!(%action, next = ?self.to_move, "Move applied");
            }
        }

        Ok(events)
    }

    /// Applies a claim on behalf of whoever's turn it is.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Vec<SessionEvent>, MoveError> {
        self.apply_move(self.to_move, row, col)
    }

    /// Returns to a fresh game with the same players. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> SessionEvent {
        self.board.reset();
        self.history.clear();
        self.to_move = Self::FIRST_PLAYER;
        self.status = Status::InProgress;
        info!("Session reset");
        SessionEvent::Reset
    }

    /// Rebuilds a session by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first illegal move.
    #[instrument(skip(names))]
    pub fn replay(names: PlayerNames, moves: &[Move]) -> Result<Self, MoveError> {
        let mut session = Self::new(names);
        for action in moves {
            session.apply_move(action.player, action.row, action.col)?;
        }
        Ok(session)
    }

    #[cfg(debug_assertions)]
    fn check_postconditions(&self, before: &Session) {
        if let Err(violations) = MoveContract::post(before, self) {
            panic!("Move postconditions violated: {violations:?}");
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.board.get(row, col)
    }

    /// Player whose turn it is. Once the game is over this is the last mover.
    pub fn active_player(&self) -> Player {
        self.to_move
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Returns true once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns the player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// End-of-game banner text, e.g. `"Alice Wins!"`.
    pub fn outcome_description(&self) -> Option<String> {
        self.outcome().map(|outcome| outcome.describe(&self.names))
    }
}
