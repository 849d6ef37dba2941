//! Command-line interface for the tic-tac-toe front-end.

use crate::config::GameConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that finished games are appended to
    #[arg(long)]
    pub result_log: Option<PathBuf>,

    /// Name of player 1 (plays X, moves first)
    #[arg(long)]
    pub player_a: Option<String>,

    /// Name of player 2 (plays O)
    #[arg(long)]
    pub player_b: Option<String>,

    /// Write tracing output to this file (default: tictactoe.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies flags given on the command line over `config`.
    #[instrument(skip(config))]
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(path) = &self.result_log {
            config = config.with_result_log(path.clone());
        }
        if let Some(name) = &self.player_a {
            config = config.with_player_a(name.clone());
        }
        if let Some(name) = &self.player_b {
            config = config.with_player_b(name.clone());
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        config
    }
}
