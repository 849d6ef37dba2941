//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_engine::{DEFAULT_RESULT_LOG, PlayerNames, ResultLog};
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct GameConfig {
    /// File finished games are appended to.
    result_log: PathBuf,

    /// How long the end-of-game banner holds before input resumes.
    game_over_pause_ms: u64,

    /// Minimum gap between two accepted moves.
    move_debounce_ms: u64,

    /// Preset name for player A; asked for interactively when absent.
    #[setters(strip_option)]
    player_a: Option<String>,

    /// Preset name for player B; asked for interactively when absent.
    #[setters(strip_option)]
    player_b: Option<String>,

    /// Tracing output file; `tictactoe.log` when absent.
    #[setters(strip_option)]
    log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            result_log: PathBuf::from(DEFAULT_RESULT_LOG),
            game_over_pause_ms: 2000,
            move_debounce_ms: 200,
            player_a: None,
            player_b: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(result_log = %config.result_log.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Both names, when both were preset.
    pub fn preset_names(&self) -> Option<PlayerNames> {
        match (&self.player_a, &self.player_b) {
            (Some(a), Some(b)) => Some(PlayerNames::new(a.as_str(), b.as_str())),
            _ => None,
        }
    }

    /// The result log this config points at.
    pub fn open_result_log(&self) -> ResultLog {
        ResultLog::new(self.result_log.clone())
    }

    /// End-of-game pause as a duration.
    pub fn game_over_pause(&self) -> Duration {
        Duration::from_millis(self.game_over_pause_ms)
    }

    /// Move debounce window as a duration.
    pub fn move_debounce(&self) -> Duration {
        Duration::from_millis(self.move_debounce_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
