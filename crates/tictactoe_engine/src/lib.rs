//! Tic-tac-toe rule engine and game session controller.
//!
//! # Architecture
//!
//! - **Board & rules**: the grid, the single `place` mutation, win and draw
//!   detection
//! - **Session**: turn order and lifecycle status, driven by player intents
//! - **Events**: what a presentation layer reacts to (`MoveApplied`,
//!   `GameOver`, `Reset`)
//! - **Result log**: the append-only record of finished games
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Outcome, Player, PlayerNames, Session};
//!
//! let mut session = Session::new(PlayerNames::new("Alice", "Bob"));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.play(row, col)?;
//! }
//! assert_eq!(session.outcome(), Some(Outcome::Win(Player::A)));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod events;
pub mod invariants;
mod result_log;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use board::{BOARD_SIZE, Board, BoardError, CELL_COUNT};
pub use events::SessionEvent;
pub use result_log::{DEFAULT_RESULT_LOG, ResultLog, ResultLogError};
pub use session::Session;
pub use types::{Mark, Outcome, Player, PlayerNames, Status};
