//! TUI application state and logic

use crate::core::Code;
use crate::error::SolverError;
use crate::solver::{Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Observation,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Solved games by number of rounds
    pub round_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Mean rounds over solved games
    #[must_use]
    pub fn average_rounds(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .round_distribution
            .iter()
            .map(|(rounds, games)| rounds * games)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }

    fn record_win(&mut self, rounds: usize) {
        self.games_won += 1;
        self.total_games += 1;
        *self.round_distribution.entry(rounds).or_insert(0) += 1;
    }

    fn forget_win(&mut self, rounds: usize) {
        self.games_won = self.games_won.saturating_sub(1);
        self.total_games = self.total_games.saturating_sub(1);
        if let Some(games) = self.round_distribution.get_mut(&rounds) {
            *games -= 1;
            if *games == 0 {
                self.round_distribution.remove(&rounds);
            }
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Observation,
        };
        app.add_message(
            "Welcome! Enter a scored guess like 'rgby 1 2', a count like '2r' or a mask like 'r..y'.",
            MessageStyle::Info,
        );
        if app.session.config().auto_pick {
            app.add_message(
                "Auto-pick is on: bare '1 2' scores the suggested guess.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Generate the candidates if the session has not started yet
    ///
    /// # Errors
    ///
    /// Returns an error if the code space cannot be enumerated.
    pub fn start(&mut self) -> Result<(), SolverError> {
        if self.session.state() == SessionState::Initialized {
            self.session.start()?;
            let remaining = self.session.remaining();
            self.add_message(&format!("{remaining} possible codes"), MessageStyle::Info);
        }
        Ok(())
    }

    /// Submit the input buffer as an observation
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if !self.handle_input(&input) {
            self.input_buffer = input;
        }
    }

    /// Apply one line of player input, returning whether it was accepted
    pub fn handle_input(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let result = self
            .session
            .parse_input(text)
            .and_then(|observation| self.session.observe(&observation));

        let state = match result {
            Ok(state) => state,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return false;
            }
        };

        match state {
            SessionState::Solved => {
                let rounds = self.session.history().len();
                self.stats.record_win(rounds);

                self.input_mode = InputMode::WinCelebration;

                let celebration = match rounds {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two rounds! 🔥",
                    3 => "✨ SPLENDID! Three rounds! ✨",
                    4 => "👏 GREAT JOB! Four rounds! 👏",
                    5 => "🎉 NICE WORK! Five rounds! 🎉",
                    _ => "🎊 CODE BROKEN! 🎊",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionState::Exhausted => {
                self.add_message(
                    "No candidates remain - some feedback may be wrong. Ctrl-U to undo.",
                    MessageStyle::Error,
                );
            }
            SessionState::Contradiction => {
                self.add_message(
                    "No candidates remain - the deductions contradict. Ctrl-U to undo.",
                    MessageStyle::Error,
                );
            }
            SessionState::AwaitingFeedback | SessionState::Initialized => {
                let remaining = self.session.remaining();
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
            }
        }
        true
    }

    pub fn new_game(&mut self) {
        if !self.session.history().is_empty() && self.session.state() != SessionState::Solved {
            self.stats.total_games += 1;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Observation;

        match self.session.reset() {
            Ok(_) => self.add_message(
                &format!(
                    "New game started! {} possible codes.",
                    self.session.remaining()
                ),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Step back one round; undoing a win takes it off the statistics
    pub fn undo_last(&mut self) {
        let solved_in = (self.session.state() == SessionState::Solved)
            .then(|| self.session.history().len());
        if self.session.undo() {
            if let Some(rounds) = solved_in {
                self.stats.forget_win(rounds);
            }
            self.input_mode = InputMode::Observation;
            let remaining = self.session.remaining();
            self.add_message(
                &format!("Undone! Back to {remaining} candidates"),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Put the suggested guess into the input buffer
    pub fn use_suggestion(&mut self) {
        if let Some(code) = self.suggestion().cloned() {
            self.input_buffer = format!("{code} ");
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&Code> {
        self.session.suggestion()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.remaining()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!("tui stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start()?;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('u') if ctrl => app.undo_last(),
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Observation => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Char('u') if ctrl => app.undo_last(),
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.use_suggestion(),
                    KeyCode::Char(c) if !ctrl => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn app(config: SessionConfig) -> App {
        let mut app = App::new(Session::from_config(config));
        app.start().unwrap();
        app
    }

    fn rgb3() -> SessionConfig {
        SessionConfig::new("rgb", 3).unwrap()
    }

    #[test]
    fn start_generates_candidates() {
        let app = app(rgb3());
        assert_eq!(app.candidates_count(), 27);
        assert_eq!(app.suggestion().map(ToString::to_string), Some("rrr".to_string()));
    }

    #[test]
    fn submit_clears_buffer_on_success() {
        let mut app = app(rgb3());
        app.input_buffer = "rrr 0 0".to_string();
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.candidates_count(), 8);
        assert_eq!(app.messages.last().unwrap().text, "8 candidates remaining");
    }

    #[test]
    fn submit_keeps_buffer_on_error() {
        let mut app = app(rgb3());
        app.input_buffer = "rrr 9 9".to_string();
        app.submit();

        assert_eq!(app.input_buffer, "rrr 9 9");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.candidates_count(), 27);
    }

    #[test]
    fn win_switches_to_celebration() {
        let mut app = app(rgb3());
        assert!(app.handle_input("rrr 0 0"));
        assert!(app.handle_input("gbg 3 0"));

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.round_distribution.get(&2), Some(&1));

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Observation);
        assert_eq!(app.candidates_count(), 27);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn undo_leaves_celebration_and_drops_win() {
        let mut app = app(rgb3());
        assert!(app.handle_input("rrr 0 0"));
        assert!(app.handle_input("gbg 3 0"));
        assert_eq!(app.stats.average_rounds(), Some(2.0));

        app.undo_last();
        assert_eq!(app.input_mode, InputMode::Observation);
        assert_eq!(app.session.state(), SessionState::AwaitingFeedback);
        assert_eq!(app.candidates_count(), 8);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.total_games, 0);
        assert!(app.stats.round_distribution.is_empty());
        assert_eq!(app.stats.average_rounds(), None);

        assert!(app.handle_input("ggg 3 0"));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.round_distribution.get(&2), Some(&1));
    }

    #[test]
    fn undo_after_exhaustion() {
        let mut app = app(rgb3());
        assert!(app.handle_input("rgb 0 0"));
        assert_eq!(app.candidates_count(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        app.undo_last();
        assert_eq!(app.candidates_count(), 27);

        app.undo_last();
        assert_eq!(app.messages.last().unwrap().text, "Nothing to undo!");
    }

    #[test]
    fn tab_fills_suggestion() {
        let mut app = app(rgb3().with_auto_pick(true));
        app.use_suggestion();
        assert_eq!(app.input_buffer, "rrr ");

        assert!(app.handle_input("0 0"));
        assert_eq!(app.suggestion().map(ToString::to_string), Some("ggg".to_string()));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(rgb3());
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }

    #[test]
    fn abandoned_game_counts() {
        let mut app = app(rgb3());
        assert!(app.handle_input("2r"));
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }
}
