//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game interface.

use super::app::{App, Statistics};
use crate::core::LetterVerdict;
use crate::game::GameState;
use crate::output::display::KEYBOARD_ROWS;
use crate::output::formatters::{create_progress_bar, verdicts_to_emoji};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let state = app.state();
    let board_height = u16::try_from(state.max_attempts()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Header
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(4),                                 // Messages
            Constraint::Length(1),                              // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, state, chunks[1]);
    render_keyboard(f, state, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile style for a verdict
#[must_use]
pub fn verdict_style(verdict: LetterVerdict) -> Style {
    match verdict {
        LetterVerdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::WrongPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterVerdict::Empty => Style::default().fg(Color::White),
    }
}

/// Board lines: submitted rows, then the row being typed, then blank rows
#[must_use]
pub fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let width = state.word_length();
    let mut lines = Vec::with_capacity(state.max_attempts());

    for (guess, verdicts) in state.guesses().iter().zip(state.verdicts()) {
        let spans: Vec<Span> = guess
            .text()
            .chars()
            .zip(verdicts.iter().copied())
            .map(|(c, v)| Span::styled(format!(" {c} "), verdict_style(v)))
            .collect();
        lines.push(Line::from(spans));
    }

    if !state.is_over() && lines.len() < state.max_attempts() {
        let typed = state.buffer().chars().map(Some);
        let spans: Vec<Span> = typed
            .chain(std::iter::repeat(None))
            .take(width)
            .map(|c| match c {
                Some(c) => Span::styled(
                    format!(" {c} "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < state.max_attempts() {
        lines.push(Line::from(Span::styled(
            " · ".repeat(width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let knowledge = state.knowledge();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(format!(" {c} "), verdict_style(knowledge.verdict_for(c))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

/// Session win distribution, one row per guess count
#[must_use]
pub fn distribution_lines(stats: &Statistics) -> Vec<Line<'static>> {
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, &count)| {
            let bar = create_progress_bar(count as f64, most as f64, 20);
            Line::from(vec![
                Span::raw(format!("{guesses} ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect()
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.state();
    let content = if state.is_over() {
        let color = if state.has_won() {
            Color::Green
        } else {
            Color::Red
        };
        let mut lines = vec![
            Line::from(Span::styled(
                state.message().to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("The word was "),
                Span::styled(
                    state.target().text().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from("Press 'n' or Enter for a new game, 'q' to quit"),
        ];
        lines.extend(
            state
                .verdicts()
                .iter()
                .map(|row| Line::from(verdicts_to_emoji(row))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(distribution_lines(&app.stats));
        lines
    } else if state.buffer().len() == state.word_length() {
        vec![Line::from("Press Enter to submit")]
    } else {
        vec![Line::from(format!(
            "Type a {}-letter word. {} attempts left.",
            state.word_length(),
            state.remaining_attempts()
        ))]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (max {})",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.max_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.state().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
