//! Bulls and cows feedback calculation and representation
//!
//! Feedback for a guess against a secret is a pair:
//! - bulls: positions where guess and secret hold the same symbol
//! - cows: remaining guess symbols found elsewhere in the secret, each secret
//!   occurrence matched at most once

use super::Code;
use crate::error::SolverError;
use std::fmt;

/// Score of one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    bulls: usize,
    cows: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> usize {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> usize {
        self.cows
    }

    /// Check if this feedback means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.bulls == length
    }

    /// Check the feedback can occur for codes of `length` symbols
    #[inline]
    #[must_use]
    pub const fn fits(self, length: usize) -> bool {
        self.bulls + self.cows <= length
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count bulls and remove them from the secret's symbol pool
    /// 2. Second pass: each non-bull guess symbol still in the pool is a cow
    ///    and consumes one occurrence
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Feedback};
    ///
    /// let secret = Code::new("rgbb").unwrap();
    /// let guess = Code::new("rbgy").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// // r is a bull, b and g are cows, y is absent
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn evaluate(secret: &Code, guess: &Code) -> Result<Self, SolverError> {
        if secret.len() != guess.len() {
            return Err(SolverError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let pairs = || secret.symbols().iter().zip(guess.symbols());
        let mut available = secret.symbol_counts();

        let mut bulls = 0;
        for (s, g) in pairs() {
            if s == g {
                bulls += 1;
                if let Some(count) = available.get_mut(s) {
                    *count -= 1;
                }
            }
        }

        let mut cows = 0;
        for (s, g) in pairs() {
            if s != g
                && let Some(count) = available.get_mut(g)
                && *count > 0
            {
                *count -= 1;
                cows += 1;
            }
        }

        Ok(Self { bulls, cows })
    }

    /// Parse feedback written as `1 2`, `1,2` or `1b2c`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("1 2"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("1,2"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("1b2c"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("2r"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.trim().to_ascii_lowercase();

        if let Some(rest) = lowered.strip_suffix('c')
            && let Some((bulls, cows)) = rest.split_once('b')
        {
            return Some(Self::new(bulls.trim().parse().ok()?, cows.trim().parse().ok()?));
        }

        let mut parts = lowered
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let bulls = parts.next()?.parse().ok()?;
        let cows = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(bulls, cows))
    }

    /// Render as pegs: `●` per bull, `○` per cow, `·` for the rest
    #[must_use]
    pub fn to_pegs(self, length: usize) -> String {
        let blanks = length.saturating_sub(self.bulls + self.cows);
        let mut pegs = String::with_capacity(length * 3);
        pegs.extend(std::iter::repeat_n('●', self.bulls));
        pegs.extend(std::iter::repeat_n('○', self.cows));
        pegs.extend(std::iter::repeat_n('·', blanks));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}b{}c", self.bulls, self.cows)
    }
}
