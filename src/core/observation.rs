//! One round of information about the secret

use super::{Alphabet, Code, Deduction, Feedback, Mask};
use crate::error::SolverError;
use std::fmt;

/// Something learned about the secret in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// A guess was played and scored
    Result { guess: Code, feedback: Feedback },
    /// A count or positional constraint entered directly
    Deduction(Deduction),
}

impl Observation {
    /// Parse a line of player input
    ///
    /// Accepted forms:
    /// - `rgb 1 1`, `rgb 1,1`, `rgb 1b1c`: a guess and its feedback
    /// - `1 1` and friends: feedback for `implied_guess`
    /// - `2r`, `.r.`: a deduction
    ///
    /// Text shaped like a mask is always a mask, even when it also reads as
    /// feedback (`1b2c` over an alphabet holding those symbols).
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the line matches no form, if a
    /// guess does not fit the configuration, or if bare feedback is given
    /// without an implied guess.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Alphabet, Code, Feedback, Observation};
    ///
    /// let alphabet = Alphabet::new("rgb").unwrap();
    /// let observation = Observation::parse("rgb 1 1", &alphabet, 3, None).unwrap();
    /// assert_eq!(
    ///     observation,
    ///     Observation::Result {
    ///         guess: Code::new("rgb").unwrap(),
    ///         feedback: Feedback::new(1, 1),
    ///     }
    /// );
    /// ```
    pub fn parse(
        text: &str,
        alphabet: &Alphabet,
        length: usize,
        implied_guess: Option<&Code>,
    ) -> Result<Self, SolverError> {
        let text = text.trim();

        if Mask::is_mask_text(text, alphabet, length) {
            return Ok(Self::Deduction(Deduction::Positional(Mask::new(text))));
        }

        if let Some(feedback) = Feedback::parse(text) {
            let guess = implied_guess.ok_or_else(|| {
                SolverError::invalid(format!(
                    "no guess to score with '{text}': enter '<guess> <bulls> <cows>'"
                ))
            })?;
            return Ok(Self::Result {
                guess: guess.clone(),
                feedback,
            });
        }

        if let Some((head, tail)) = text.split_once(char::is_whitespace)
            && let Some(feedback) = Feedback::parse(tail)
        {
            let guess = Code::parse(head, alphabet, length)?;
            return Ok(Self::Result { guess, feedback });
        }

        Deduction::parse(text, alphabet, length).map(Self::Deduction)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result { guess, feedback } => write!(f, "{guess} {feedback}"),
            Self::Deduction(deduction) => write!(f, "{deduction}"),
        }
    }
}
