//! Code solving command
//!
//! Plays a known secret against the session's strategy and records the path.

use crate::core::{Code, Feedback};
use crate::error::SolverError;
use crate::solver::{Session, SessionState, Strategy};

/// Give up after this many guesses
pub const DEFAULT_MAX_GUESSES: usize = 20;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub score: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with the given session
///
/// The session is reset to the full code space first.
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the session's alphabet and squares
/// - The session cannot be started
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    session: &mut Session<S>,
) -> Result<SolveResult, SolverError> {
    let secret = Code::parse(
        &config.secret,
        session.config().alphabet(),
        session.config().squares(),
    )?;
    session.reset()?;

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining();

        let Some(guess) = session.suggestion().cloned() else {
            break;
        };

        let feedback = Feedback::evaluate(&secret, &guess)?;
        let state = session.record_result(&guess, feedback.bulls(), feedback.cows())?;

        guesses.push(GuessStep {
            guess: guess.to_string(),
            feedback,
            score: guess.distinct_symbols(),
            candidates_before,
            candidates_after: session.remaining(),
        });

        if state == SessionState::Solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: config.secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret: config.secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::solver::FirstStrategy;

    fn session(alphabet: &str, squares: usize) -> Session {
        Session::from_config(SessionConfig::new(alphabet, squares).unwrap())
    }

    #[test]
    fn solve_code_succeeds() {
        let mut session = session("rgbyop", 4);
        let result = solve_code(SolveConfig::new("bgyo".to_string()), &mut session).unwrap();

        assert!(result.success);
        let last = result.guesses.last().unwrap();
        assert_eq!(last.guess, "bgyo");
        assert!(last.feedback.is_solved(4));
    }

    #[test]
    fn solve_records_history() {
        let mut session = session("rgb", 3);
        let result = solve_code(SolveConfig::new("rbg".to_string()), &mut session).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, 27);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_first_guess_is_lowest_score() {
        let mut session = session("rgb", 3);
        let result = solve_code(SolveConfig::new("rrr".to_string()), &mut session).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].score, 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let mut session = session("rgb", 3);
        assert!(solve_code(SolveConfig::new("rgy".to_string()), &mut session).is_err());
        assert!(solve_code(SolveConfig::new("rgbb".to_string()), &mut session).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut session = session("rgbyop", 4);
        let mut config = SolveConfig::new("pyob".to_string());
        config.max_guesses = 1;

        let result = solve_code(config, &mut session).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn solve_reuses_session() {
        let mut session = Session::new(SessionConfig::new("rgb", 3).unwrap(), FirstStrategy);
        let first = solve_code(SolveConfig::new("bbb".to_string()), &mut session).unwrap();
        let second = solve_code(SolveConfig::new("bbb".to_string()), &mut session).unwrap();

        assert!(first.success && second.success);
        assert_eq!(first.guesses.len(), second.guesses.len());
    }
}
