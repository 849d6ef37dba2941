//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player A (moves first, plays X).
    A,
    /// Player B (moves second, plays O).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> Mark {
        Mark::Occupied(self)
    }

    /// Symbol drawn for this player's marks.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the cell is unclaimed.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Win(Player),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Human-readable result line, e.g. `"Alice Wins!"` or `"Draw!"`.
    #[instrument(skip(names))]
    pub fn describe(&self, names: &PlayerNames) -> String {
        match self {
            Outcome::Win(player) => format!("{} Wins!", names.name(*player)),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Terminal; only a reset leaves this state.
    Over(Outcome),
}

impl Status {
    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Over(outcome) => Some(*outcome),
        }
    }
}

/// Display names of the two players, fixed before play starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    a: String,
    b: String,
}

impl PlayerNames {
    /// Fallback name for player A.
    pub const DEFAULT_A: &'static str = "Player 1";
    /// Fallback name for player B.
    pub const DEFAULT_B: &'static str = "Player 2";

    /// Creates the name pair. Blank names fall back to the defaults.
    #[instrument(skip(a, b))]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let pick = |name: String, fallback: &str| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        };
        Self {
            a: pick(a.into(), Self::DEFAULT_A),
            b: pick(b.into(), Self::DEFAULT_B),
        }
    }

    /// Returns the name of the given player.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_A, Self::DEFAULT_B)
    }
}
