//! Append-only log of finished games.

use super::events::SessionEvent;
use super::types::{Outcome, PlayerNames};
use derive_more::{Display, Error};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Default location of the result log, relative to the working directory.
pub const DEFAULT_RESULT_LOG: &str = "game_result.txt";

/// Result log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Result log error: {} at {}:{}", message, file, line)]
pub struct ResultLogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ResultLogError {
    /// Creates a new result log error with caller location tracking.
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

/// Appends one line per finished game to a text file.
///
/// The file is opened in append mode (created if missing), written and
/// closed for every entry. Nothing ever reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// Creates a log writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `description` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the file cannot be opened or written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn append(&self, description: &str) -> Result<(), ResultLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ResultLogError::new(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        writeln!(file, "{description}").map_err(|e| {
            ResultLogError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        info!("Result recorded");
        Ok(())
    }

    /// Records a finished game as `"<name> Wins!"` or `"Draw!"`.
    pub fn record(&self, outcome: &Outcome, names: &PlayerNames) -> Result<(), ResultLogError> {
        self.append(&outcome.describe(names))
    }

    /// Records every `GameOver` among `events`, ignoring the rest.
    ///
    /// Returns the number of lines written.
    pub fn record_events(
        &self,
        events: &[SessionEvent],
        names: &PlayerNames,
    ) -> Result<usize, ResultLogError> {
        let mut written = 0;
        for outcome in events.iter().filter_map(SessionEvent::outcome) {
            self.record(&outcome, names)?;
            written += 1;
        }
        Ok(written)
    }
}

impl Default for ResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LOG)
    }
}
