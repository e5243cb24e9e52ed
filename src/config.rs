//! Session configuration
//!
//! Built once at startup from the command line and validated up front, so
//! the core never sees an impossible game.

use crate::core::Alphabet;
use crate::error::SolverError;

/// Symbols used when none are given
pub const DEFAULT_ALPHABET: &str = "rgbyop";

/// Squares per code when none are given
pub const DEFAULT_SQUARES: usize = 4;

/// Print every candidate once this few remain
pub const DEFAULT_TOP: usize = 10;

/// Largest code space a session will enumerate
pub const MAX_CANDIDATES: usize = 1 << 22;

/// Configuration for one solving session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    alphabet: Alphabet,
    squares: usize,
    /// List all candidates when at most this many remain
    pub top: usize,
    /// Treat the suggestion as the guess played, so bare feedback applies to it
    pub auto_pick: bool,
    /// Guess strategy name, see `StrategyType::from_name`
    pub strategy: String,
}

impl SessionConfig {
    /// Create a configuration for `squares` positions over `alphabet`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the alphabet is invalid, if
    /// `squares` is zero, or if the code space exceeds `MAX_CANDIDATES`.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::config::SessionConfig;
    ///
    /// let config = SessionConfig::new("rgb", 3).unwrap();
    /// assert_eq!(config.space_size(), 27);
    ///
    /// assert!(SessionConfig::new("rgb", 0).is_err());
    /// assert!(SessionConfig::new("", 3).is_err());
    /// ```
    pub fn new(alphabet: &str, squares: usize) -> Result<Self, SolverError> {
        let alphabet = Alphabet::new(alphabet)?;

        if squares == 0 {
            return Err(SolverError::invalid("squares must be at least 1"));
        }

        match alphabet.space_size(squares) {
            Some(size) if size <= MAX_CANDIDATES => {}
            _ => {
                return Err(SolverError::invalid(format!(
                    "{} symbols over {squares} squares exceeds the limit of {MAX_CANDIDATES} candidates",
                    alphabet.len()
                )));
            }
        }

        Ok(Self {
            alphabet,
            squares,
            top: DEFAULT_TOP,
            auto_pick: false,
            strategy: "fewest-symbols".to_string(),
        })
    }

    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    #[must_use]
    pub fn with_auto_pick(mut self, auto_pick: bool) -> Self {
        self.auto_pick = auto_pick;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn squares(&self) -> usize {
        self.squares
    }

    /// Number of codes in the full space (bounded by `MAX_CANDIDATES`)
    #[must_use]
    pub fn space_size(&self) -> usize {
        self.alphabet.space_size(self.squares).unwrap_or(0)
    }
}
