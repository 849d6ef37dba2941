//! Tic-tac-toe entry point.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tictactoe::{Cli, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "tictactoe.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(GameConfig::load(cli.config.as_deref())?);

    // Setup logging to file to avoid interfering with TUI
    let log_path = config
        .log_file()
        .as_deref()
        .unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let log_file = std::fs::File::create(log_path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(result_log = %config.result_log().display(), "Configuration ready");

    tictactoe::run(config)
}
