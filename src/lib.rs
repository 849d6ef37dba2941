//! Two-player terminal tic-tac-toe.
//!
//! The rules and the session state machine live in [`tictactoe_engine`];
//! this crate adds the terminal front-end on top:
//!
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: name entry, keyboard and mouse play, result logging
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameConfig, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_player_a("Alice").with_player_b("Bob");
//! run(config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use tui::app::{App, Screen};
pub use tui::input::{Cursor, NameEntry, cell_for_digit, move_cursor};
pub use tui::run;
