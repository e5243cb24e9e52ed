//! Solving session
//!
//! Threads the candidate set through rounds. Each observation produces a new
//! set that replaces the old one; the old set is kept for undo.

use super::filter::{apply_deduction, filter_by_result};
use super::generator::generate;
use super::scorer::{self, Scored};
use super::strategy::{Strategy, StrategyType};
use crate::config::SessionConfig;
use crate::core::{Code, Deduction, Feedback, Observation};
use crate::error::SolverError;
use log::info;
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Configured, candidates not generated yet
    Initialized,
    /// Candidates remain and the next observation is expected
    AwaitingFeedback,
    /// A guess scored all bulls
    Solved,
    /// Feedback left no candidate: some feedback was entered wrong
    Exhausted,
    /// A deduction left no candidate: the deductions contradict each other
    Contradiction,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Contradiction)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Initialized => "not started",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Contradiction => "contradiction",
        };
        f.write_str(text)
    }
}

/// One applied observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub observation: Observation,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
struct Snapshot {
    candidates: Vec<Code>,
    state: SessionState,
}

/// A solving session over one configured code space
///
/// # Examples
/// ```
/// use bulls_cows::config::SessionConfig;
/// use bulls_cows::core::Code;
/// use bulls_cows::solver::{Session, SessionState};
///
/// let config = SessionConfig::new("rgb", 3).unwrap();
/// let mut session = Session::from_config(config);
/// session.start().unwrap();
/// assert_eq!(session.remaining(), 27);
///
/// let guess = Code::new("rgb").unwrap();
/// session.record_result(&guess, 3, 0).unwrap();
/// assert_eq!(session.state(), SessionState::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct Session<S: Strategy = StrategyType> {
    config: SessionConfig,
    strategy: S,
    candidates: Vec<Code>,
    state: SessionState,
    history: Vec<Round>,
    undo_stack: Vec<Snapshot>,
    /// Picked once per candidate set so every reader sees the same guess
    suggested: Option<Code>,
}

impl Session<StrategyType> {
    /// Create a session using the strategy named in the configuration
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        let strategy = StrategyType::from_name(&config.strategy);
        Self::new(config, strategy)
    }
}

impl<S: Strategy> Session<S> {
    #[must_use]
    pub const fn new(config: SessionConfig, strategy: S) -> Self {
        Self {
            config,
            strategy,
            candidates: Vec::new(),
            state: SessionState::Initialized,
            history: Vec::new(),
            undo_stack: Vec::new(),
            suggested: None,
        }
    }

    /// Generate the full candidate set and start awaiting feedback
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the code space cannot be
    /// enumerated.
    pub fn start(&mut self) -> Result<SessionState, SolverError> {
        self.candidates = generate(self.config.alphabet(), self.config.squares())?;
        self.history.clear();
        self.undo_stack.clear();
        self.state = if self.candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingFeedback
        };
        self.refresh_suggestion();
        info!(
            "session started: {} candidates over '{}' x {}",
            self.candidates.len(),
            self.config.alphabet(),
            self.config.squares()
        );
        Ok(self.state)
    }

    /// Return to the full candidate set
    ///
    /// Reuses the set generated by `start` when there is one.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the session was never started
    /// and the code space cannot be enumerated.
    pub fn reset(&mut self) -> Result<SessionState, SolverError> {
        if self.state == SessionState::Initialized {
            return self.start();
        }
        if let Some(initial) = self.undo_stack.drain(..).next() {
            self.candidates = initial.candidates;
            self.state = initial.state;
        }
        self.history.clear();
        self.refresh_suggestion();
        info!("session reset: {} candidates", self.candidates.len());
        Ok(self.state)
    }

    /// Apply any observation
    ///
    /// # Errors
    /// See [`Session::record_result`] and [`Session::apply_deduction`].
    pub fn observe(&mut self, observation: &Observation) -> Result<SessionState, SolverError> {
        match observation {
            Observation::Result { guess, feedback } => {
                self.record_result(guess, feedback.bulls(), feedback.cows())
            }
            Observation::Deduction(deduction) => self.apply_deduction(deduction),
        }
    }

    /// Narrow the candidates to those consistent with a scored guess
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the session is not awaiting
    /// feedback, the guess does not fit the configuration, or
    /// `bulls + cows` exceeds the number of squares.
    pub fn record_result(
        &mut self,
        guess: &Code,
        bulls: usize,
        cows: usize,
    ) -> Result<SessionState, SolverError> {
        self.ensure_accepting()?;
        guess.validate(self.config.alphabet(), self.config.squares())?;

        let feedback = Feedback::new(bulls, cows);
        if !feedback.fits(self.config.squares()) {
            return Err(SolverError::invalid(format!(
                "{bulls} bulls and {cows} cows is more than {} squares",
                self.config.squares()
            )));
        }

        let next = filter_by_result(&self.candidates, guess, bulls, cows)?;
        let state = if feedback.is_solved(self.config.squares()) {
            SessionState::Solved
        } else if next.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingFeedback
        };

        let observation = Observation::Result {
            guess: guess.clone(),
            feedback,
        };
        Ok(self.commit(observation, next, state))
    }

    /// Narrow the candidates with a count or positional deduction
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the session is not awaiting
    /// feedback or the deduction does not fit the configuration.
    pub fn apply_deduction(&mut self, deduction: &Deduction) -> Result<SessionState, SolverError> {
        self.ensure_accepting()?;
        deduction.validate(self.config.alphabet(), self.config.squares())?;

        let next = apply_deduction(&self.candidates, deduction)?;
        let state = if next.is_empty() {
            SessionState::Contradiction
        } else {
            SessionState::AwaitingFeedback
        };

        Ok(self.commit(Observation::Deduction(deduction.clone()), next, state))
    }

    fn commit(&mut self, observation: Observation, next: Vec<Code>, state: SessionState) -> SessionState {
        let round = Round {
            observation,
            candidates_before: self.candidates.len(),
            candidates_after: next.len(),
        };
        info!(
            "round {}: {} ({} -> {}), {state}",
            self.history.len() + 1,
            round.observation,
            round.candidates_before,
            round.candidates_after
        );

        let previous = std::mem::replace(&mut self.candidates, next);
        self.undo_stack.push(Snapshot {
            candidates: previous,
            state: self.state,
        });
        self.history.push(round);
        self.state = state;
        self.refresh_suggestion();
        state
    }

    /// Undo the last round
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.candidates = snapshot.candidates;
        self.state = snapshot.state;
        self.history.pop();
        self.refresh_suggestion();
        info!("undo: back to {} candidates", self.candidates.len());
        true
    }

    fn ensure_accepting(&self) -> Result<(), SolverError> {
        match self.state {
            SessionState::AwaitingFeedback => Ok(()),
            SessionState::Initialized => Err(SolverError::invalid("session has not been started")),
            terminal => Err(SolverError::invalid(format!(
                "session is {terminal}: undo or start a new game first"
            ))),
        }
    }

    /// Parse player input, scoring bare feedback against the suggestion when
    /// auto-pick is on
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the text is not a valid
    /// observation.
    pub fn parse_input(&self, text: &str) -> Result<Observation, SolverError> {
        let implied = if self.config.auto_pick {
            self.suggestion()
        } else {
            None
        };
        Observation::parse(
            text,
            self.config.alphabet(),
            self.config.squares(),
            implied,
        )
    }

    fn refresh_suggestion(&mut self) {
        self.suggested = if self.state == SessionState::AwaitingFeedback {
            self.strategy.select_guess(&self.candidates).cloned()
        } else {
            None
        };
    }

    /// Next guess according to the strategy
    ///
    /// Chosen when the candidate set last changed, so repeated calls agree.
    /// `None` unless the session is awaiting feedback.
    #[must_use]
    pub fn suggestion(&self) -> Option<&Code> {
        self.suggested.as_ref()
    }

    /// The first `k` candidates by score
    #[must_use]
    pub fn ranked(&self, k: usize) -> Vec<Scored> {
        scorer::top(&self.candidates, k)
    }

    /// The secret, once solved
    #[must_use]
    pub fn solution(&self) -> Option<&Code> {
        if self.state != SessionState::Solved {
            return None;
        }
        match self.history.last().map(|round| &round.observation) {
            Some(Observation::Result { guess, .. }) => Some(guess),
            _ => None,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mask;
    use crate::solver::{FirstStrategy, RandomStrategy};

    fn started(alphabet: &str, squares: usize) -> Session {
        let mut session = Session::from_config(SessionConfig::new(alphabet, squares).unwrap());
        session.start().unwrap();
        session
    }

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    #[test]
    fn new_session_is_initialized() {
        let session = Session::from_config(SessionConfig::new("rgb", 3).unwrap());
        assert_eq!(session.state(), SessionState::Initialized);
        assert_eq!(session.remaining(), 0);
        assert!(session.suggestion().is_none());
    }

    #[test]
    fn observing_before_start_fails() {
        let mut session = Session::from_config(SessionConfig::new("rgb", 3).unwrap());
        assert!(matches!(
            session.record_result(&code("rgb"), 1, 1),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn start_generates_full_space() {
        let session = started("rgb", 3);
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert_eq!(session.remaining(), 27);
        assert_eq!(session.suggestion(), Some(&code("rrr")));
    }

    #[test]
    fn record_result_narrows_and_logs_round() {
        let mut session = started("rgb", 3);
        let state = session.record_result(&code("rgb"), 1, 1).unwrap();

        assert_eq!(state, SessionState::AwaitingFeedback);
        assert!(session.remaining() < 27);
        assert!(!session.candidates().contains(&code("rgb")));

        let round = &session.history()[0];
        assert_eq!(round.candidates_before, 27);
        assert_eq!(round.candidates_after, session.remaining());
    }

    #[test]
    fn all_bulls_solves() {
        let mut session = started("rgb", 3);
        session.record_result(&code("gbr"), 3, 0).unwrap();

        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.solution(), Some(&code("gbr")));
        assert_eq!(session.candidates(), &[code("gbr")]);
        assert!(session.suggestion().is_none());
    }

    #[test]
    fn inconsistent_feedback_exhausts() {
        let mut session = started("rgb", 3);
        // Every code over rgb shares at least one symbol with rgb
        let state = session.record_result(&code("rgb"), 0, 0).unwrap();
        assert_eq!(state, SessionState::Exhausted);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn contradictory_deductions() {
        let mut session = started("rg", 3);
        session
            .apply_deduction(&Deduction::Count { count: 3, symbol: 'r' })
            .unwrap();
        let state = session
            .apply_deduction(&Deduction::Positional(Mask::new("g..")))
            .unwrap();
        assert_eq!(state, SessionState::Contradiction);
    }

    #[test]
    fn terminal_state_refuses_observations() {
        let mut session = started("rgb", 3);
        session.record_result(&code("rgb"), 3, 0).unwrap();
        assert!(matches!(
            session.record_result(&code("rgb"), 1, 0),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn record_result_validates_input() {
        let mut session = started("rgb", 3);
        assert!(session.record_result(&code("rg"), 1, 0).is_err());
        assert!(session.record_result(&code("rgy"), 1, 0).is_err());
        assert!(session.record_result(&code("rgb"), 2, 2).is_err());
        // Rejected input leaves the session untouched
        assert_eq!(session.remaining(), 27);
        assert!(session.history().is_empty());
    }

    #[test]
    fn apply_deduction_validates_input() {
        let mut session = started("rgb", 3);
        assert!(
            session
                .apply_deduction(&Deduction::Positional(Mask::new("r.")))
                .is_err()
        );
        assert!(
            session
                .apply_deduction(&Deduction::Count { count: 1, symbol: 'y' })
                .is_err()
        );
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut session = started("rgb", 3);
        session.record_result(&code("rgb"), 1, 1).unwrap();
        let after_first = session.remaining();
        session.record_result(&code("rrg"), 3, 0).unwrap();
        assert_eq!(session.state(), SessionState::Solved);

        assert!(session.undo());
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert_eq!(session.remaining(), after_first);
        assert_eq!(session.history().len(), 1);

        assert!(session.undo());
        assert_eq!(session.remaining(), 27);
        assert!(!session.undo());
    }

    #[test]
    fn reset_returns_to_full_space() {
        let mut session = started("rgb", 3);
        session
            .apply_deduction(&Deduction::Count { count: 0, symbol: 'r' })
            .unwrap();
        session.record_result(&code("gbg"), 0, 0).unwrap();

        assert_eq!(session.reset().unwrap(), SessionState::AwaitingFeedback);
        assert_eq!(session.remaining(), 27);
        assert!(session.history().is_empty());
    }

    #[test]
    fn reset_before_start_starts() {
        let mut session = Session::from_config(SessionConfig::new("ab", 2).unwrap());
        assert_eq!(session.reset().unwrap(), SessionState::AwaitingFeedback);
        assert_eq!(session.remaining(), 4);
    }

    #[test]
    fn parse_input_respects_auto_pick() {
        let config = SessionConfig::new("rgb", 3).unwrap();
        let mut manual = Session::from_config(config.clone());
        manual.start().unwrap();
        assert!(manual.parse_input("1 1").is_err());

        let mut auto = Session::from_config(config.with_auto_pick(true));
        auto.start().unwrap();
        let observation = auto.parse_input("1 1").unwrap();
        assert_eq!(
            observation,
            Observation::Result {
                guess: code("rrr"),
                feedback: Feedback::new(1, 1)
            }
        );
    }

    #[test]
    fn random_suggestion_is_the_guess_scored() {
        let config = SessionConfig::new("rgbyop", 4).unwrap().with_auto_pick(true);
        let mut session = Session::new(config, RandomStrategy);
        session.start().unwrap();

        for _ in 0..20 {
            let shown = session.suggestion().cloned().unwrap();
            assert_eq!(session.suggestion(), Some(&shown));

            let Observation::Result { guess, .. } = session.parse_input("0 0").unwrap() else {
                panic!("expected a scored guess");
            };
            assert_eq!(guess, shown);
        }

        let shown = session.suggestion().cloned().unwrap();
        session.record_result(&shown, 0, 0).unwrap();
        assert!(session.undo());
        assert!(session.candidates().contains(session.suggestion().unwrap()));
    }

    #[test]
    fn mask_input_not_taken_as_feedback() {
        let config = SessionConfig::new("12bc", 4).unwrap().with_auto_pick(true);
        let mut session = Session::from_config(config);
        session.start().unwrap();

        assert_eq!(
            session.parse_input("1b2c").unwrap(),
            Observation::Deduction(Deduction::Positional(Mask::new("1b2c")))
        );
    }

    #[test]
    fn observe_dispatches() {
        let mut session = started("rg", 3);
        let observation = session.parse_input("2r").unwrap();
        session.observe(&observation).unwrap();
        assert_eq!(session.remaining(), 3);

        let observation = session.parse_input("r.. ").unwrap();
        session.observe(&observation).unwrap();
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn custom_strategy() {
        let mut session = Session::new(SessionConfig::new("rgb", 2).unwrap(), FirstStrategy);
        session.start().unwrap();
        session
            .apply_deduction(&Deduction::Positional(Mask::new(".g")))
            .unwrap();
        assert_eq!(session.suggestion(), Some(&code("rg")));
    }

    #[test]
    fn ranked_lists_lowest_scores_first() {
        let session = started("ab", 2);
        let ranked: Vec<String> = session
            .ranked(2)
            .iter()
            .map(|s| s.code.to_string())
            .collect();
        assert_eq!(ranked, ["aa", "bb"]);
    }
}
