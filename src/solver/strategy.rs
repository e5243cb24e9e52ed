//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scorer;
use crate::core::Code;

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from the candidates
    ///
    /// Returns `None` if no candidates remain.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Lowest distinct-symbol score first (default)
    FewestSymbols(FewestSymbolsStrategy),
    /// First remaining candidate in generation order
    First(FirstStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::FewestSymbols(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["fewest-symbols", "first", "random"];

    /// Create strategy from name string
    ///
    /// Defaults to fewest-symbols if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::FewestSymbols(FewestSymbolsStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FewestSymbols(_) => "fewest-symbols",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::FewestSymbols(FewestSymbolsStrategy)
    }
}

/// Picks the top of the distinct-symbol ranking
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestSymbolsStrategy;

impl Strategy for FewestSymbolsStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        scorer::best(candidates)
    }
}

/// Picks the first candidate in generation order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Random strategy
///
/// Useful as a baseline in benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}
