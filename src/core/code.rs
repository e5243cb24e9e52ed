//! Code representation
//!
//! A Code is one candidate secret (or one guess): a fixed-length sequence of
//! alphabet symbols.

use super::Alphabet;
use crate::error::SolverError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// An ordered sequence of symbols
///
/// Immutable once built. Equality and hashing are by symbol sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    symbols: Box<[char]>,
}

impl Code {
    /// Create a code from its text form
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the text is empty or contains
    /// whitespace.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    ///
    /// let code = Code::new("rgb").unwrap();
    /// assert_eq!(code.len(), 3);
    /// assert_eq!(code.to_string(), "rgb");
    /// ```
    pub fn new(text: &str) -> Result<Self, SolverError> {
        if text.is_empty() {
            return Err(SolverError::invalid("code must not be empty"));
        }
        if text.chars().any(char::is_whitespace) {
            return Err(SolverError::invalid(format!(
                "code '{text}' contains whitespace"
            )));
        }
        Ok(Self::from_symbols(text.chars().collect()))
    }

    /// Create a code and check it against the game configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the code does not have exactly
    /// `length` symbols or uses a symbol outside `alphabet`.
    pub fn parse(text: &str, alphabet: &Alphabet, length: usize) -> Result<Self, SolverError> {
        let code = Self::new(text.trim())?;
        code.validate(alphabet, length)?;
        Ok(code)
    }

    pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
        Self {
            symbols: symbols.into_boxed_slice(),
        }
    }

    /// Check that the code fits the game configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` on a wrong length or a foreign symbol.
    pub fn validate(&self, alphabet: &Alphabet, length: usize) -> Result<(), SolverError> {
        if self.len() != length {
            return Err(SolverError::invalid(format!(
                "'{self}' has {} symbols, expected {length}",
                self.len()
            )));
        }
        if let Some(&foreign) = self.symbols.iter().find(|&&s| !alphabet.contains(s)) {
            return Err(SolverError::invalid(format!(
                "'{foreign}' in '{self}' is not in the alphabet '{alphabet}'"
            )));
        }
        Ok(())
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

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the symbol at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position]
    }

    /// How many times `symbol` occurs in the code
    #[must_use]
    pub fn count_of(&self, symbol: char) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    /// Number of distinct symbols in the code
    #[must_use]
    pub fn distinct_symbols(&self) -> usize {
        self.symbols.iter().collect::<FxHashSet<_>>().len()
    }

    /// Multiplicity of each symbol
    pub(crate) fn symbol_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
