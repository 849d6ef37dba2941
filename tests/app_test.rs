//! Tests for the terminal app's input handling and session reactions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tictactoe::{App, GameConfig, Screen};
use tictactoe_engine::{Mark, Outcome, Player};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn config(result_log: PathBuf) -> GameConfig {
    GameConfig::default()
        .with_result_log(result_log)
        .with_player_a("Alice")
        .with_player_b("Bob")
}

/// Presses digit keys far enough apart to clear the debounce window.
fn press_digits(app: &mut App, digits: &str, start: Instant) -> Instant {
    let mut now = start;
    for c in digits.chars() {
        now += Duration::from_millis(300);
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    now
}

#[test]
fn test_name_entry_starts_the_game() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&GameConfig::default().with_result_log(dir.path().join("r.txt")));
    let now = Instant::now();
    assert!(matches!(app.screen(), Screen::Names(_)));

    for c in "Ann".chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    app.handle_key(key(KeyCode::Enter), now);
    assert!(matches!(app.screen(), Screen::Names(_)));

    for c in "Ben".chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    app.handle_key(key(KeyCode::Enter), now);

    let session = app.session().expect("Game started");
    assert_eq!(session.names().name(Player::A), "Ann");
    assert_eq!(session.names().name(Player::B), "Ben");
    assert_eq!(app.status(), "Ann's turn (X)");
}

#[test]
fn test_escape_quits_from_name_entry() {
    let mut app = App::new(&GameConfig::default());
    app.handle_key(key(KeyCode::Esc), Instant::now());
    assert!(app.should_quit());
}

#[test]
fn test_preset_names_skip_entry() {
    let dir = TempDir::new().unwrap();
    let app = App::new(&config(dir.path().join("r.txt")));
    assert!(app.session().is_some());
    assert_eq!(app.cursor(), (1, 1));
}

#[test]
fn test_win_is_logged_and_pauses_input() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_result.txt");
    let mut app = App::new(&config(log.clone()));

    let end = press_digits(&mut app, "14253", Instant::now());

    let session = app.session().unwrap();
    assert_eq!(session.outcome(), Some(Outcome::Win(Player::A)));
    assert_eq!(app.banner().as_deref(), Some("Alice Wins!"));
    assert!(app.status().starts_with("Alice Wins!"));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "Alice Wins!\n");

    // Reset is swallowed during the pause.
    let during = end + Duration::from_millis(100);
    assert!(app.is_paused(during));
    app.handle_key(key(KeyCode::Char('r')), during);
    assert!(app.session().unwrap().is_over());

    let after = end + Duration::from_millis(2500);
    assert!(!app.is_paused(after));
    app.handle_key(key(KeyCode::Char('r')), after);
    let session = app.session().unwrap();
    assert!(!session.is_over());
    assert_eq!(session.active_player(), Player::A);
    assert_eq!(session.board().marked_count(), 0);
    assert_eq!(app.status(), "Alice's turn (X)");
}

#[test]
fn test_draw_is_logged() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("game_result.txt");
    let mut app = App::new(&config(log.clone()));

    press_digits(&mut app, "123547869", Instant::now());

    assert_eq!(app.session().unwrap().outcome(), Some(Outcome::Draw));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "Draw!\n");
}

#[test]
fn test_reset_ignored_while_running() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));

    let now = press_digits(&mut app, "1", Instant::now());
    app.handle_key(key(KeyCode::Char('r')), now + Duration::from_millis(300));

    assert_eq!(app.session().unwrap().board().marked_count(), 1);
}

#[test]
fn test_rapid_second_move_is_debounced() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));
    let start = Instant::now();

    app.handle_key(key(KeyCode::Char('1')), start);
    app.handle_key(key(KeyCode::Char('4')), start + Duration::from_millis(50));
    assert_eq!(app.session().unwrap().cell(1, 0), Some(Mark::Empty));

    app.handle_key(key(KeyCode::Char('4')), start + Duration::from_millis(300));
    assert_eq!(app.session().unwrap().cell(1, 0), Some(Mark::Occupied(Player::B)));
}

#[test]
fn test_occupied_cell_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));

    press_digits(&mut app, "11", Instant::now());

    assert_eq!(app.status(), "Cell (0, 0) is already occupied");
    let session = app.session().unwrap();
    assert_eq!(session.active_player(), Player::B);
    assert_eq!(session.board().marked_count(), 1);
}

#[test]
fn test_cursor_and_enter_claim_cell() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));
    let now = Instant::now();

    app.handle_key(key(KeyCode::Up), now);
    app.handle_key(key(KeyCode::Char('h')), now);
    assert_eq!(app.cursor(), (0, 0));
    app.handle_key(key(KeyCode::Enter), now);

    assert_eq!(app.session().unwrap().cell(0, 0), Some(Mark::Occupied(Player::A)));
    assert!(app.status().starts_with("Alice took cell 1."));
}

#[test]
fn test_click_claims_cell_under_pointer() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));
    app.set_board_area(Rect::new(0, 0, 29, 11));
    let now = Instant::now();

    // Column 9 is the separator between the first two cells.
    app.handle_click(9, 1, now);
    assert_eq!(app.session().unwrap().board().marked_count(), 0);

    app.handle_click(25, 9, now);
    assert_eq!(app.session().unwrap().cell(2, 2), Some(Mark::Occupied(Player::A)));
    assert_eq!(app.cursor(), (2, 2));
}

#[test]
fn test_unwritable_result_log_keeps_game_over() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("game_result.txt");
    let mut app = App::new(&config(log));

    press_digits(&mut app, "14253", Instant::now());

    assert!(app.session().unwrap().is_over());
    assert!(app.status().contains("(result not saved:"));
}

#[test]
fn test_quit_keys() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&config(dir.path().join("r.txt")));
    app.handle_key(key(KeyCode::Char('q')), Instant::now());
    assert!(app.should_quit());

    let mut app = App::new(&config(dir.path().join("r.txt")));
    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Instant::now(),
    );
    assert!(app.should_quit());
}

#[test]
fn test_preset_player_a_only_asks_for_player_b() {
    let dir = TempDir::new().unwrap();
    let config = GameConfig::default()
        .with_result_log(dir.path().join("r.txt"))
        .with_player_a("Alice");
    let mut app = App::new(&config);
    let now = Instant::now();

    let Screen::Names(entry) = app.screen() else {
        panic!("Expected name entry");
    };
    assert_eq!(entry.first(), Some("Alice"));
    assert_eq!(entry.prompt(), "Enter Player 2 Name:");

    for c in "Bob".chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    app.handle_key(key(KeyCode::Enter), now);

    let session = app.session().expect("Game started");
    assert_eq!(session.names().name(Player::A), "Alice");
    assert_eq!(session.names().name(Player::B), "Bob");
}

#[test]
fn test_preset_player_b_only_asks_for_player_a() {
    let dir = TempDir::new().unwrap();
    let config = GameConfig::default()
        .with_result_log(dir.path().join("r.txt"))
        .with_player_b("Bob");
    let mut app = App::new(&config);
    let now = Instant::now();

    let Screen::Names(entry) = app.screen() else {
        panic!("Expected name entry");
    };
    assert_eq!(entry.second(), Some("Bob"));
    assert_eq!(entry.prompt(), "Enter Player 1 Name:");

    for c in "Ann".chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
    app.handle_key(key(KeyCode::Enter), now);

    let session = app.session().expect("Game started");
    assert_eq!(session.names().name(Player::A), "Ann");
    assert_eq!(session.names().name(Player::B), "Bob");
}
