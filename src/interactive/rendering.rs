//! TUI rendering with ratatui
//!
//! Board, keyboard hints, settings and messages.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, WORD_LENGTH};
use crate::game::{GameStatus, MAX_ATTEMPTS};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::wordlists::WordProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: WordProvider>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(20),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Settings and messages
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Tile colours for a letter result, plain for unknown letters
#[must_use]
pub fn tile_style(result: Option<LetterResult>) -> Style {
    match result {
        Some(LetterResult::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_play_area<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 * 2 + 3), // Board
            Constraint::Min(5),                               // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style)
}

/// One row per attempt: scored guesses, then the row being typed, then blanks
fn board_lines<P: WordProvider>(app: &App<'_, P>) -> Vec<Line<'static>> {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            let span = if let Some(attempt) = history.get(row) {
                let letter = char::from(attempt.guess.letter_at(col));
                tile(letter, tile_style(Some(attempt.outcome.at(col))))
            } else if row == history.len() && !app.session.is_finished() {
                match app.input_buffer.chars().nth(col) {
                    Some(letter) => tile(letter, tile_style(None)),
                    None => tile('_', Style::default().fg(Color::DarkGray)),
                }
            } else {
                tile('·', Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let knowledge = app.session.keyboard();
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        tile(letter, tile_style(knowledge.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(Span::styled(
        "ENTER ⏎   BACK ⌫",
        Style::default().fg(Color::DarkGray),
    )));

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Settings
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_settings(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn render_settings<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let config = app.session.config();
    let word = if app.show_word {
        app.session.hidden_word().text().to_string()
    } else {
        "hidden".to_string()
    };

    let content = vec![
        Line::from(format!(
            "Guesses must be words: {}",
            yes_no(config.guesses_must_be_words)
        )),
        Line::from(vec![
            Span::raw("Show word (Ctrl+S):    "),
            Span::styled(
                word,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Attempt:               {}/{}",
            app.session.attempt(),
            app.session.max_attempts()
        )),
        Line::from(format!(
            "Word list:             {} answers, {} guesses",
            app.words.answer_count(),
            app.words.guess_count()
        )),
    ];

    let settings = Paragraph::new(content).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(settings, area);
}

fn render_messages<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<P: WordProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
        ])
        .split(area);

    let state_text = match app.session.status() {
        GameStatus::InProgress => "Playing",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_finished() {
        "TAB: New Game | ESC: Quit"
    } else {
        "Enter: Submit | TAB: New Game | ESC: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
