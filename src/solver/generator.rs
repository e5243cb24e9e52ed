//! Candidate generation
//!
//! Enumerates every code of a given length over an alphabet, leftmost
//! position varying slowest, in alphabet order.

use crate::core::{Alphabet, Code};
use crate::error::SolverError;
use std::iter::FusedIterator;

/// Lazy enumeration of the code space
///
/// Works like an odometer over symbol indices, so no intermediate lists are
/// built. Cloning gives an independent iterator from the same point, which
/// makes the sequence restartable.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    symbols: Vec<char>,
    odometer: Vec<usize>,
    remaining: Option<usize>,
    exhausted: bool,
}

impl CodeSpace {
    /// Enumerate all codes of `length` symbols over `alphabet`
    ///
    /// A zero length yields nothing.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Alphabet;
    /// use bulls_cows::solver::CodeSpace;
    ///
    /// let alphabet = Alphabet::new("ab").unwrap();
    /// let codes: Vec<String> = CodeSpace::new(&alphabet, 2).map(|c| c.to_string()).collect();
    /// assert_eq!(codes, ["aa", "ab", "ba", "bb"]);
    /// ```
    #[must_use]
    pub fn new(alphabet: &Alphabet, length: usize) -> Self {
        Self {
            symbols: alphabet.symbols().to_vec(),
            odometer: vec![0; length],
            remaining: alphabet.space_size(length),
            exhausted: length == 0 || alphabet.is_empty(),
        }
    }

    /// Advance the odometer, rightmost position fastest
    fn advance(&mut self) {
        for digit in self.odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < self.symbols.len() {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CodeSpace {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.exhausted {
            return None;
        }

        let code = Code::from_symbols(self.odometer.iter().map(|&i| self.symbols[i]).collect());
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CodeSpace {}

/// Materialize the full code space
///
/// # Errors
/// Returns `SolverError::InvalidInput` if the space has more codes than fit
/// in memory addressing (`usize`).
///
/// # Examples
/// ```
/// use bulls_cows::core::Alphabet;
/// use bulls_cows::solver::generate;
///
/// let alphabet = Alphabet::new("rgb").unwrap();
/// assert_eq!(generate(&alphabet, 3).unwrap().len(), 27);
/// assert!(generate(&alphabet, 0).unwrap().is_empty());
/// ```
pub fn generate(alphabet: &Alphabet, length: usize) -> Result<Vec<Code>, SolverError> {
    if alphabet.space_size(length).is_none() {
        return Err(SolverError::invalid(format!(
            "{} symbols over {length} squares is too many codes to enumerate",
            alphabet.len()
        )));
    }
    Ok(CodeSpace::new(alphabet, length).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(codes: &[Code]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn generate_two_by_two() {
        let alphabet = Alphabet::new("ab").unwrap();
        assert_eq!(
            texts(&generate(&alphabet, 2).unwrap()),
            ["aa", "ab", "ba", "bb"]
        );
    }

    #[test]
    fn generate_follows_input_alphabet_order() {
        let alphabet = Alphabet::new("ba").unwrap();
        assert_eq!(
            texts(&generate(&alphabet, 2).unwrap()),
            ["bb", "ba", "ab", "aa"]
        );
    }

    #[test]
    fn generate_counts() {
        let alphabet = Alphabet::new("rgb").unwrap();
        assert_eq!(generate(&alphabet, 1).unwrap().len(), 3);
        assert_eq!(generate(&alphabet, 3).unwrap().len(), 27);
        assert_eq!(generate(&alphabet, 5).unwrap().len(), 243);
    }

    #[test]
    fn generate_zero_length_is_empty() {
        let alphabet = Alphabet::new("rgb").unwrap();
        assert!(generate(&alphabet, 0).unwrap().is_empty());
    }

    #[test]
    fn generate_single_symbol() {
        let alphabet = Alphabet::new("x").unwrap();
        assert_eq!(texts(&generate(&alphabet, 3).unwrap()), ["xxx"]);
    }

    #[test]
    fn generate_overflow_is_invalid() {
        let alphabet = Alphabet::new("0123456789").unwrap();
        assert!(matches!(
            generate(&alphabet, 40),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn generate_has_no_duplicates() {
        let alphabet = Alphabet::new("rgby").unwrap();
        let codes = generate(&alphabet, 4).unwrap();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn code_space_size_hint_is_exact() {
        let alphabet = Alphabet::new("rgb").unwrap();
        let mut space = CodeSpace::new(&alphabet, 2);
        assert_eq!(space.size_hint(), (9, Some(9)));
        space.next();
        space.next();
        assert_eq!(space.size_hint(), (7, Some(7)));
    }

    #[test]
    fn code_space_is_restartable_by_clone() {
        let alphabet = Alphabet::new("rgb").unwrap();
        let space = CodeSpace::new(&alphabet, 2);
        let first: Vec<Code> = space.clone().collect();
        let second: Vec<Code> = space.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn code_space_is_fused() {
        let alphabet = Alphabet::new("a").unwrap();
        let mut space = CodeSpace::new(&alphabet, 1);
        assert!(space.next().is_some());
        assert!(space.next().is_none());
        assert!(space.next().is_none());
    }
}
