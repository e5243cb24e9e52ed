//! Deductions: constraints on the secret that do not come from a guess
//!
//! Two forms, written the way players jot them down:
//! - `2r`: the secret contains exactly two `r`
//! - `.r..`: the secret has `r` in the second position

use super::{Alphabet, Code};
use crate::error::SolverError;
use std::fmt;

/// Positional constraint with wildcards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Box<[Option<char>]>,
}

impl Mask {
    /// Character standing for "any symbol" in a mask
    pub const WILDCARD: char = '.';

    /// Build a mask from text, `.` marks a free position
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Mask};
    ///
    /// let mask = Mask::new(".r.");
    /// assert!(mask.matches(&Code::new("grb").unwrap()));
    /// assert!(!mask.matches(&Code::new("rgb").unwrap()));
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let slots = text
            .chars()
            .map(|c| (c != Self::WILDCARD).then_some(c))
            .collect();
        Self { slots }
    }

    /// Whether `text` reads as a mask: exactly `length` characters, each an
    /// alphabet symbol or the wildcard
    #[must_use]
    pub fn is_mask_text(text: &str, alphabet: &Alphabet, length: usize) -> bool {
        text.chars().count() == length
            && text
                .chars()
                .all(|c| c == Self::WILDCARD || alphabet.contains(c))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Positions pinned to a symbol, with that symbol
    pub fn pinned(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|symbol| (i, symbol)))
    }

    /// Check a code against every pinned position
    ///
    /// Codes of a different length never match.
    #[must_use]
    pub fn matches(&self, code: &Code) -> bool {
        code.len() == self.len() && self.pinned().all(|(i, symbol)| code.symbol_at(i) == symbol)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(Self::WILDCARD))?;
        }
        Ok(())
    }
}

/// A constraint on the secret asserted independently of any guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deduction {
    /// The secret contains `symbol` exactly `count` times
    Count { count: usize, symbol: char },
    /// The secret matches the mask at every pinned position
    Positional(Mask),
}

impl Deduction {
    /// Parse a deduction, dispatching on its shape
    ///
    /// A string of exactly `length` characters drawn from the alphabet and
    /// `.` is a positional mask. Otherwise digits followed by one alphabet
    /// symbol are a count.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the text matches neither form.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Alphabet, Deduction, Mask};
    ///
    /// let alphabet = Alphabet::new("rgb").unwrap();
    ///
    /// let count = Deduction::parse("2r", &alphabet, 3).unwrap();
    /// assert_eq!(count, Deduction::Count { count: 2, symbol: 'r' });
    ///
    /// let positional = Deduction::parse(".r.", &alphabet, 3).unwrap();
    /// assert_eq!(positional, Deduction::Positional(Mask::new(".r.")));
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet, length: usize) -> Result<Self, SolverError> {
        let text = text.trim();

        if Mask::is_mask_text(text, alphabet, length) {
            return Ok(Self::Positional(Mask::new(text)));
        }

        if let Some(symbol) = text.chars().last()
            && alphabet.contains(symbol)
        {
            let digits = &text[..text.len() - symbol.len_utf8()];
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                let count = digits
                    .parse()
                    .map_err(|_| SolverError::invalid(format!("count '{digits}' is too large")))?;
                return Ok(Self::Count { count, symbol });
            }
        }

        Err(SolverError::invalid(format!(
            "'{text}' is not a deduction: use a count like 2{first} or a {length}-square mask like {example}",
            first = alphabet.symbols().first().copied().unwrap_or('x'),
            example = example_mask(alphabet, length),
        )))
    }

    /// Check the deduction fits the game configuration
    ///
    /// Unsatisfiable counts are allowed: they empty the candidate set.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if a symbol is outside the alphabet
    /// or a mask has the wrong length.
    pub fn validate(&self, alphabet: &Alphabet, length: usize) -> Result<(), SolverError> {
        match self {
            Self::Count { symbol, .. } => {
                if !alphabet.contains(*symbol) {
                    return Err(SolverError::invalid(format!(
                        "'{symbol}' is not in the alphabet '{alphabet}'"
                    )));
                }
            }
            Self::Positional(mask) => {
                if mask.len() != length {
                    return Err(SolverError::invalid(format!(
                        "mask '{mask}' has {} squares, expected {length}",
                        mask.len()
                    )));
                }
                if let Some((_, symbol)) = mask.pinned().find(|&(_, s)| !alphabet.contains(s)) {
                    return Err(SolverError::invalid(format!(
                        "'{symbol}' in mask '{mask}' is not in the alphabet '{alphabet}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn example_mask(alphabet: &Alphabet, length: usize) -> String {
    let symbol = alphabet.symbols().first().copied().unwrap_or('x');
    (0..length)
        .map(|i| if i == 0 { symbol } else { Mask::WILDCARD })
        .collect()
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count { count, symbol } => write!(f, "{count}{symbol}"),
            Self::Positional(mask) => write!(f, "{mask}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> Alphabet {
        Alphabet::new("rgb").unwrap()
    }

    #[test]
    fn mask_wildcards_are_free() {
        let mask = Mask::new("...");
        assert_eq!(mask.pinned().count(), 0);
        assert!(mask.matches(&Code::new("bgr").unwrap()));
    }

    #[test]
    fn mask_pinned_positions() {
        let mask = Mask::new("r.b");
        let pinned: Vec<_> = mask.pinned().collect();
        assert_eq!(pinned, vec![(0, 'r'), (2, 'b')]);
    }

    #[test]
    fn mask_rejects_other_lengths() {
        let mask = Mask::new(".r");
        assert!(!mask.matches(&Code::new("grb").unwrap()));
    }

    #[test]
    fn mask_display_round_trips_text() {
        assert_eq!(Mask::new("..r.").to_string(), "..r.");
    }

    #[test]
    fn parse_count() {
        let deduction = Deduction::parse("2r", &rgb(), 3).unwrap();
        assert_eq!(deduction, Deduction::Count { count: 2, symbol: 'r' });

        let deduction = Deduction::parse("0b", &rgb(), 3).unwrap();
        assert_eq!(deduction, Deduction::Count { count: 0, symbol: 'b' });
    }

    #[test]
    fn parse_count_with_multiple_digits() {
        let deduction = Deduction::parse("12g", &rgb(), 3).unwrap();
        assert_eq!(deduction, Deduction::Count { count: 12, symbol: 'g' });
    }

    #[test]
    fn parse_positional() {
        let deduction = Deduction::parse("..r", &rgb(), 3).unwrap();
        assert_eq!(deduction, Deduction::Positional(Mask::new("..r")));
    }

    #[test]
    fn parse_full_code_is_positional() {
        let deduction = Deduction::parse("rgb", &rgb(), 3).unwrap();
        assert_eq!(deduction, Deduction::Positional(Mask::new("rgb")));
    }

    #[test]
    fn parse_two_square_count_is_not_a_mask() {
        // With two squares "2r" has the mask length, but '2' is no symbol
        let deduction = Deduction::parse("2r", &rgb(), 2).unwrap();
        assert_eq!(deduction, Deduction::Count { count: 2, symbol: 'r' });
    }

    #[test]
    fn parse_rejects_unknown_forms() {
        assert!(Deduction::parse("", &rgb(), 3).is_err());
        assert!(Deduction::parse("2x", &rgb(), 3).is_err());
        assert!(Deduction::parse("r", &rgb(), 3).is_err());
        assert!(Deduction::parse("..x", &rgb(), 3).is_err());
        assert!(Deduction::parse("....", &rgb(), 3).is_err());
    }

    #[test]
    fn validate_checks_alphabet_and_length() {
        let alphabet = rgb();
        assert!(
            Deduction::Count { count: 1, symbol: 'y' }
                .validate(&alphabet, 3)
                .is_err()
        );
        assert!(
            Deduction::Positional(Mask::new("r."))
                .validate(&alphabet, 3)
                .is_err()
        );
        assert!(
            Deduction::Positional(Mask::new("y.."))
                .validate(&alphabet, 3)
                .is_err()
        );
        assert!(
            Deduction::Count { count: 5, symbol: 'r' }
                .validate(&alphabet, 3)
                .is_ok()
        );
    }

    #[test]
    fn display_matches_input_form() {
        assert_eq!(Deduction::parse("2r", &rgb(), 3).unwrap().to_string(), "2r");
        assert_eq!(Deduction::parse(".g.", &rgb(), 3).unwrap().to_string(), ".g.");
    }
}
