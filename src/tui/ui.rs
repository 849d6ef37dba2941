//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Screen};
use super::input::{Cursor, NameEntry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{BOARD_SIZE, Mark, Player, Session};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_CELLS: u16 = BOARD_SIZE as u16;

/// Width of the drawn grid, separators included.
pub const GRID_WIDTH: u16 = GRID_CELLS * CELL_WIDTH + (GRID_CELLS - 1);
/// Height of the drawn grid, separators included.
pub const GRID_HEIGHT: u16 = GRID_CELLS * CELL_HEIGHT + (GRID_CELLS - 1);

/// Draws the whole screen and remembers where the grid landed for clicks.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Title
            Constraint::Min(GRID_HEIGHT), // Board / name entry
            Constraint::Length(4),        // Status
            Constraint::Length(1),        // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = match app.screen() {
        Screen::Names(entry) => {
            draw_names(frame, chunks[1], entry);
            None
        }
        Screen::Playing(session) => {
            let area = center_rect(chunks[1], GRID_WIDTH, GRID_HEIGHT);
            draw_board(frame, area, session, app.cursor());
            Some(area)
        }
    };
    if let Some(area) = board_area {
        app.set_board_area(area);
    }

    draw_status(frame, chunks[2], app.banner(), app.status());

    let help = match app.screen() {
        Screen::Names(_) => "Enter: confirm   Backspace: delete   Esc: quit",
        Screen::Playing(_) => concat!(
            "Arrows/hjkl: move   Enter/Space/1-9/click: claim   ",
            "r: new game (after the end)   q: quit"
        ),
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Maps a terminal position to the grid cell under it, if any.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Cursor> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .find(|&(row, col)| {
            let cell = cell_rect(area, row, col);
            x >= cell.x && x < cell.x + cell.width && y >= cell.y && y < cell.y + cell.height
        })
}

fn cell_rect(area: Rect, row: usize, col: usize) -> Rect {
    Rect::new(
        area.x + col as u16 * (CELL_WIDTH + 1),
        area.y + row as u16 * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

fn draw_names(frame: &mut Frame, area: Rect, entry: &NameEntry) {
    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(Span::styled(entry.prompt(), label.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            format!("> {}_", entry.input()),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Player 1: {}", entry.first().unwrap_or("")),
            label,
        )),
        Line::from(Span::styled(
            format!("Player 2: {}", entry.second().unwrap_or("")),
            label,
        )),
    ];
    let form = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Enter Player Names"));
    frame.render_widget(form, center_rect(area, 40, 8));
}

fn draw_board(frame: &mut Frame, area: Rect, session: &Session, cursor: Cursor) {
    let show_cursor = !session.is_over();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let mark = session.cell(row, col).unwrap_or_default();
            let highlighted = show_cursor && cursor == (row, col);
            let cell = cell_rect(area, row, col);
            draw_cell(frame, cell, mark, row * BOARD_SIZE + col + 1, highlighted);

            if col + 1 < BOARD_SIZE {
                let sep = Rect::new(cell.x + CELL_WIDTH, cell.y, 1, CELL_HEIGHT);
                draw_separator_vertical(frame, sep);
            }
        }
        if row + 1 < BOARD_SIZE {
            let y = area.y + row as u16 * (CELL_HEIGHT + 1) + CELL_HEIGHT;
            draw_separator(frame, Rect::new(area.x, y, GRID_WIDTH, 1));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, mark: Mark, number: usize, highlighted: bool) {
    let (symbol, base_style) = match mark {
        Mark::Empty => (number.to_string(), Style::default().fg(Color::DarkGray)),
        Mark::Occupied(player) => (player.symbol().to_string(), mark_style(player)),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ]);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// X is red and O is blue.
fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::A => Color::Red,
        Player::B => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_status(frame: &mut Frame, area: Rect, banner: Option<String>, status: &str) {
    let mut lines = Vec::new();
    if let Some(banner) = banner {
        lines.push(Line::from(Span::styled(
            banner,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        status.to_string(),
        Style::default().fg(Color::Yellow),
    )));

    let status = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let line: String = (0..GRID_CELLS)
        .map(|_| "─".repeat(CELL_WIDTH as usize))
        .collect::<Vec<_>>()
        .join("┼");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(Text::from(lines)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
