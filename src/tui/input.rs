//! Keyboard input: name entry and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_engine::{BOARD_SIZE, PlayerNames};
use tracing::{debug, instrument};

/// Cell coordinates `(row, col)` under the cursor.
pub type Cursor = (usize, usize);

/// Moves the cursor with arrow keys or hjkl, stopping at the edges.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let (row, col) = cursor;
    let last = BOARD_SIZE - 1;
    match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        _ => cursor,
    }
}

/// Maps the digits 1-9 to cells, row-major.
pub fn cell_for_digit(c: char) -> Option<Cursor> {
    let digit = c.to_digit(10)? as usize;
    (1..=BOARD_SIZE * BOARD_SIZE)
        .contains(&digit)
        .then(|| ((digit - 1) / BOARD_SIZE, (digit - 1) % BOARD_SIZE))
}

/// Collects the two player names, one line at a time.
///
/// A name already known from the config is kept and never asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    first: Option<String>,
    second: Option<String>,
    input: String,
}

impl NameEntry {
    /// Starts with both names empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with whichever names are already known.
    pub fn preset(first: Option<String>, second: Option<String>) -> Self {
        Self {
            first,
            second,
            input: String::new(),
        }
    }

    /// Prompt for the name currently being typed.
    pub fn prompt(&self) -> &'static str {
        if self.first.is_none() {
            "Enter Player 1 Name:"
        } else {
            "Enter Player 2 Name:"
        }
    }

    /// Text typed so far for the current name.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Player 1's name once known.
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// Player 2's name when preset.
    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Accepts printable ASCII only.
    pub fn push(&mut self, c: char) {
        if (' '..='~').contains(&c) {
            self.input.push(c);
        }
    }

    /// Deletes the last typed character.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Confirms the current line. Returns both names once neither is missing.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Option<PlayerNames> {
        let line = std::mem::take(&mut self.input);
        match (self.first.take(), self.second.take()) {
            (None, Some(second)) => {
                debug!("Player 1 name entered, player 2 preset");
                Some(PlayerNames::new(line, second))
            }
            (None, None) => {
                debug!("Player 1 name entered");
                self.first = Some(line);
                None
            }
            (Some(first), _) => {
                debug!("Player 2 name entered");
                Some(PlayerNames::new(first, line))
            }
        }
    }
}
