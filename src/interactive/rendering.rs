//! TUI rendering with ratatui
//!
//! Grid, virtual keyboard, splash screen, and overlay widgets for the game.

use super::app::App;
use crate::core::{CellFeedback, GameStatus, MAX_GUESSES, WORD_LEN};
use crate::output::formatters::share_message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    if app.splash_active() {
        render_splash(f, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Grid
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.engine.status().is_over() && !app.show_about {
        render_game_over(f, app, f.area());
    }

    if app.show_about {
        render_about(f, f.area());
    }
}

fn render_splash(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "W O R D L E",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Guess the word in six tries",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let splash = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(splash, centered_rect(60, 30, area));
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("WORDLE — day {}", app.day))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for col in 0..WORD_LEN {
            let letter = app
                .engine
                .cell(row, col)
                .map_or(' ', |c| c.to_ascii_uppercase());
            let cell = format!(" {letter} ");
            spans.push(Span::styled(cell, cell_style(app, row, col)));
            if col + 1 < WORD_LEN {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// Style per cell: feedback colors for committed rows, cursor highlight on
/// the active cell
fn cell_style(app: &App, row: usize, col: usize) -> Style {
    match app.engine.cell_feedback(row, col) {
        CellFeedback::Exact => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellFeedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellFeedback::Unrevealed => {
            if app.engine.is_cursor(row, col) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let exact = app.engine.letters_with_feedback(CellFeedback::Exact);
    let present = app.engine.letters_with_feedback(CellFeedback::Present);
    let absent = app.engine.letters_with_feedback(CellFeedback::Absent);

    let mut lines = Vec::with_capacity(KEY_ROWS.len());
    for key_row in KEY_ROWS {
        let mut spans = Vec::new();
        for ch in key_row.chars() {
            let key = format!(" {} ", ch.to_ascii_uppercase());
            // Exact beats present beats absent
            let style = if exact.contains(&ch) {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else if present.contains(&ch) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if absent.contains(&ch) {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(key, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.engine.status() {
        GameStatus::InProgress => {
            format!("Guess {}/{}", app.engine.current_row() + 1, MAX_GUESSES)
        }
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => format!(
            "The word was {}",
            app.engine.target().text().to_uppercase()
        ),
    };

    let help_text = if app.engine.status().is_over() {
        "n: new game | q: quit | Esc: about"
    } else {
        "letters: type | Enter: submit | Backspace: delete | Esc: about | Ctrl-C: quit"
    };

    let status = Paragraph::new(vec![
        Line::from(status_text),
        Line::from(Span::styled(
            help_text,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_game_over(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.engine.status() {
        GameStatus::Won => (" 🎉 Solved! ", Color::Green),
        GameStatus::Lost => (" Out of tries ", Color::Red),
        GameStatus::InProgress => return,
    };

    let mut lines = Vec::new();
    if app.engine.status() == GameStatus::Lost {
        lines.push(Line::from(format!(
            "The word was {}",
            app.engine.target().text().to_uppercase()
        )));
        lines.push(Line::from(""));
    }
    for share_line in share_message(&app.engine, app.day).lines() {
        lines.push(Line::from(share_line.to_string()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: new game | q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    let popup = centered_rect(40, 60, area);
    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

fn render_about(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from("Wordle is a simple word-guessing game. Once per day a new"),
        Line::from("five-letter word appears, to be found in at most six tries."),
        Line::from(""),
        Line::from("Each committed guess colors its letters: green for the"),
        Line::from("right spot, yellow for a letter elsewhere in the word,"),
        Line::from("gray for a letter the word does not contain."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let about = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);
    f.render_widget(about, popup);
}

/// Centered sub-rectangle taking the given percentages of the area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
