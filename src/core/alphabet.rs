//! The set of symbols a code is built from

use crate::error::SolverError;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Ordered set of distinct symbols
///
/// The order the symbols were given in is the enumeration order used by the
/// generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the string is empty, repeats a
    /// symbol, or uses whitespace or the `.` wildcard as a symbol.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("rgb").unwrap();
    /// assert_eq!(alphabet.symbols(), &['r', 'g', 'b']);
    ///
    /// assert!(Alphabet::new("").is_err());
    /// assert!(Alphabet::new("rgr").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, SolverError> {
        if symbols.is_empty() {
            return Err(SolverError::invalid("alphabet must not be empty"));
        }

        let mut seen = FxHashSet::default();
        let mut ordered = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if symbol.is_whitespace() || symbol == super::Mask::WILDCARD {
                return Err(SolverError::invalid(format!(
                    "'{symbol}' cannot be used as a symbol"
                )));
            }
            if !seen.insert(symbol) {
                return Err(SolverError::invalid(format!(
                    "symbol '{symbol}' appears more than once in the alphabet"
                )));
            }
            ordered.push(symbol);
        }

        Ok(Self { symbols: ordered })
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Number of codes of `length` positions over this alphabet
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    #[must_use]
    pub fn space_size(&self, length: usize) -> Option<usize> {
        if length == 0 {
            return Some(0);
        }
        let exponent = u32::try_from(length).ok()?;
        self.symbols.len().checked_pow(exponent)
    }
}

impl FromStr for Alphabet {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
