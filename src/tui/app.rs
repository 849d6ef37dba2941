//! Application state and logic.
//!
//! The app is the presentation collaborator of a [`Session`]: it turns key
//! presses and clicks into move intents, and reacts to the session's events
//! by updating the status line and appending to the result log.

use super::input::{Cursor, NameEntry, cell_for_digit, move_cursor};
use crate::config::GameConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tictactoe_engine::{BOARD_SIZE, Player, PlayerNames, ResultLog, Session, SessionEvent};
use tracing::{debug, info, instrument, warn};

/// Which screen is showing.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Collecting player names.
    Names(NameEntry),
    /// A game is on the board.
    Playing(Session),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    result_log: ResultLog,
    game_over_pause: Duration,
    move_debounce: Duration,
    cursor: Cursor,
    status: String,
    last_move_at: Option<Instant>,
    game_over_at: Option<Instant>,
    board_area: Option<Rect>,
    should_quit: bool,
}

fn home() -> Cursor {
    (BOARD_SIZE / 2, BOARD_SIZE / 2)
}

fn turn_prompt(session: &Session) -> String {
    let player = session.active_player();
    format!(
        "{}'s turn ({})",
        session.names().name(player),
        player.symbol()
    )
}

impl App {
    /// Creates the app, skipping name entry when both names are preset.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let mut app = Self {
            screen: Screen::Names(NameEntry::new()),
            result_log: config.open_result_log(),
            game_over_pause: config.game_over_pause(),
            move_debounce: config.move_debounce(),
            cursor: home(),
            status: String::new(),
            last_move_at: None,
            game_over_at: None,
            board_area: None,
            should_quit: false,
        };
        match config.preset_names() {
            Some(names) => app.start(names),
            None => {
                app.screen = Screen::Names(NameEntry::preset(
                    config.player_a().clone(),
                    config.player_b().clone(),
                ));
                app.status = "Type a name and press Enter".to_string();
            }
        }
        app
    }

    fn start(&mut self, names: PlayerNames) {
        let session = Session::new(names);
        self.status = turn_prompt(&session);
        self.screen = Screen::Playing(session);
    }

    /// Returns the current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the session once play has started.
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            Screen::Names(_) => None,
        }
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// End-of-game banner, e.g. `"Alice Wins!"`.
    pub fn banner(&self) -> Option<String> {
        self.session().and_then(Session::outcome_description)
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the end-of-game banner holds the board.
    pub fn is_paused(&self, now: Instant) -> bool {
        self.game_over_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.game_over_pause)
    }

    /// Records where the grid was last drawn so clicks can be mapped to cells.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Handles a key press.
    #[instrument(skip(self, now), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Screen::Names(entry) = &mut self.screen {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Backspace => entry.backspace(),
                KeyCode::Char(c) => entry.push(c),
                KeyCode::Enter => {
                    if let Some(names) = entry.submit() {
                        info!(
                            player_a = names.name(Player::A),
                            player_b = names.name(Player::B),
                            "Players named"
                        );
                        self.start(names);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ if self.is_paused(now) => debug!("Input ignored during game-over pause"),
            KeyCode::Char('r') => self.reset(now),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.claim(row, col, now);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some((row, col)) = cell_for_digit(c) {
                    self.cursor = (row, col);
                    self.claim(row, col, now);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Handles a left click at terminal coordinates `(column, row)`.
    #[instrument(skip(self, now))]
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if self.session().is_none() || self.is_paused(now) {
            return;
        }
        let Some(area) = self.board_area else {
            return;
        };
        if let Some((cell_row, cell_col)) = super::ui::cell_at(area, column, row) {
            self.cursor = (cell_row, cell_col);
            self.claim(cell_row, cell_col, now);
        }
    }

    fn claim(&mut self, row: usize, col: usize, now: Instant) {
        if self
            .last_move_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.move_debounce)
        {
            debug!(row, col, "Selection debounced");
            return;
        }
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        match session.play(row, col) {
            Ok(events) => {
                let names = session.names().clone();
                let next = turn_prompt(session);
                self.react(&events, &names, next, now);
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn react(&mut self, events: &[SessionEvent], names: &PlayerNames, next: String, now: Instant) {
        for event in events {
            match event {
                SessionEvent::MoveApplied { row, col, player } => {
                    self.last_move_at = Some(now);
                    self.status = format!(
                        "{} took cell {}. {}",
                        names.name(*player),
                        row * BOARD_SIZE + col + 1,
                        next
                    );
                }
                SessionEvent::GameOver { outcome } => {
                    self.game_over_at = Some(now);
                    let banner = outcome.describe(names);
                    self.status = match self.result_log.record(outcome, names) {
                        Ok(()) => format!("{banner} Press r to play again, q to quit."),
                        Err(e) => {
                            warn!(error = %e, "Failed to record game result");
                            format!("{banner} (result not saved: {})", e.message)
                        }
                    };
                }
                SessionEvent::Reset => {
                    self.cursor = home();
                    self.last_move_at = None;
                    self.game_over_at = None;
                }
            }
        }
    }

    fn reset(&mut self, now: Instant) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        if !session.is_over() {
            debug!("Reset ignored while the game is running");
            return;
        }
        let event = session.reset();
        let names = session.names().clone();
        let next = turn_prompt(session);
        self.react(&[event], &names, next.clone(), now);
        self.status = next;
    }
}
