//! Terminal front-end for tic-tac-toe.

pub mod app;
pub mod input;
mod ui;

use crate::config::GameConfig;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the game until the players quit.
#[instrument(skip(config))]
pub fn run(config: GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Goodbye");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let now = Instant::now();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row, now)
            }
            _ => {}
        }
    }
}
