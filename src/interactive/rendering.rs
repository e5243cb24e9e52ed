//! TUI rendering with ratatui
//!
//! Panels for the suggestion, candidates, history and search progress.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Observation;
use crate::output::formatters::score_bar;
use crate::solver::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 BULLS & COWS ASSISTANT - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Suggestion
            Constraint::Percentage(40), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_suggestion(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();

    let content = if let Some(code) = app.suggestion() {
        let score = code.distinct_symbols();
        vec![
            Line::from(vec![
                Span::raw("Suggested: "),
                Span::styled(
                    code.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Score:     [{}] {score} distinct symbols",
                score_bar(score, config.squares(), 12)
            )),
            Line::from(format!(
                "Secret:    {} squares over '{}'",
                config.squares(),
                config.alphabet()
            )),
        ]
    } else {
        let text = match app.session.state() {
            SessionState::Solved => app
                .session
                .solution()
                .map_or_else(|| "Solved!".to_string(), |code| format!("Solved: {code}")),
            SessionState::Exhausted | SessionState::Contradiction => {
                "No candidates remain".to_string()
            }
            SessionState::Initialized | SessionState::AwaitingFeedback => {
                "No suggestion available".to_string()
            }
        };
        vec![Line::from(text)]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Suggestion ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates_count();
    let top = app.session.config().top;

    let content = if count == 0 {
        vec![Line::from("No candidates")]
    } else if count <= top {
        let mut lines = vec![Line::from(format!("{count} remaining, best first:"))];
        for scored in app.session.ranked(top) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    scored.code.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" ({})", scored.score),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (count as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let squares = app.session.config().squares();
    let history = app.session.history();

    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, round)| {
            let pegs = match &round.observation {
                Observation::Result { feedback, .. } => feedback.to_pegs(squares),
                Observation::Deduction(_) => String::new(),
            };
            ListItem::new(format!(
                "{}: {} {pegs} {} → {}",
                history.len() - i,
                round.observation,
                round.candidates_before,
                round.candidates_after
            ))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Search space gauge
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.session.config().space_size().max(1) as f64).log2();
    let remaining = app.candidates_count();
    let bits_gained = total_bits - (remaining.max(1) as f64).log2();
    let progress_pct = if total_bits > 0.0 {
        (bits_gained / total_bits * 100.0).clamp(0.0, 100.0) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CODE BROKEN! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Observation => (
            " Enter Observation (guess bulls cows, count, or mask) | TAB for suggestion ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = Paragraph::new(format!("State: {}", app.session.state()))
        .alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = match app.stats.average_rounds() {
        Some(average) => format!(
            "Games: {} | Won: {} | Avg: {average:.1}",
            app.stats.total_games, app.stats.games_won
        ),
        None => format!(
            "Games: {} | Won: {}",
            app.stats.total_games, app.stats.games_won
        ),
    };
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.session.state().is_terminal() {
        "Esc: Quit | ^N: New Game | ^U: Undo"
    } else {
        "Esc: Quit | ^U: Undo | TAB: Suggestion"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
