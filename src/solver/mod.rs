//! Bulls and cows solving
//!
//! Generation, filtering and ranking of candidate codes, plus the session
//! that threads them through a game.

mod filter;
mod generator;
mod scorer;
mod session;
pub mod strategy;

pub use filter::{apply_deduction, filter_by_count, filter_by_position, filter_by_result};
pub use generator::{CodeSpace, generate};
pub use scorer::{Scored, best, score, top};
pub use session::{Round, Session, SessionState};
pub use strategy::{
    FewestSymbolsStrategy, FirstStrategy, RandomStrategy, Strategy, StrategyType,
};
