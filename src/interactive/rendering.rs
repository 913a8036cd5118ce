//! TUI rendering with ratatui
//!
//! Projects the game state into the 6x5 tile grid plus messaging.

use super::app::App;
use crate::core::Tile;
use crate::game::{MAX_TURNS, RowView, Status, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Board
            Constraint::Length(4), // Message area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TERMLE - guess the five-letter word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_TURNS * 2);

    for index in 0..MAX_TURNS {
        lines.push(board_row(app, index));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn board_row(app: &App, index: usize) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::with_capacity(WORD_LENGTH * 2);

    match app.game.row(index) {
        RowView::Submitted(word) => {
            let tiles = app
                .game
                .row_tiles(index)
                .unwrap_or([Tile::Absent; WORD_LENGTH]);

            for (i, tile) in tiles.iter().enumerate() {
                push_cell(&mut spans, tile_span(char::from(word.char_at(i)), *tile));
            }
        }
        RowView::Active(buffer) => {
            let mut letters = buffer.chars();
            for _ in 0..WORD_LENGTH {
                match letters.next() {
                    Some(c) => push_cell(&mut spans, typed_span(c)),
                    None => push_cell(&mut spans, placeholder_span()),
                }
            }
        }
        RowView::Empty => {
            for _ in 0..WORD_LENGTH {
                push_cell(&mut spans, placeholder_span());
            }
        }
    }

    Line::from(spans)
}

fn push_cell(spans: &mut Vec<Span<'static>>, cell: Span<'static>) {
    if !spans.is_empty() {
        spans.push(Span::raw(" "));
    }
    spans.push(cell);
}

fn tile_span(letter: char, tile: Tile) -> Span<'static> {
    let style = match tile {
        Tile::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tile::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tile::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };

    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn typed_span(letter: char) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn placeholder_span() -> Span<'static> {
    Span::styled(" _ ", Style::default().fg(Color::DarkGray))
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (lines, color) = match app.game.status() {
        Status::Won | Status::Lost => {
            let message = app.game.end_message().unwrap_or_default();
            let color = if app.game.status() == Status::Won {
                Color::Green
            } else {
                Color::Red
            };
            (
                vec![
                    Line::from(message),
                    Line::from("Press 'n' to play again, 'q' to quit"),
                ],
                color,
            )
        }
        Status::InProgress if app.awaiting_solution() => (
            vec![Line::from("Fetching a word from the dictionary...")],
            Color::DarkGray,
        ),
        Status::InProgress => (
            vec![Line::from("Type a 5-letter word and press Enter")],
            Color::White,
        ),
    };

    let message = Paragraph::new(lines)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let turn_text = format!("Turn: {}/{}", (app.game.turn() + 1).min(MAX_TURNS), MAX_TURNS);
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
