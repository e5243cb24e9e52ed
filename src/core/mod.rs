//! Core domain types for bulls and cows
//!
//! Pure value types: the alphabet, codes, feedback and deductions. Nothing in
//! here does I/O.

mod alphabet;
mod code;
mod deduction;
mod feedback;
mod observation;

pub use alphabet::Alphabet;
pub use code::Code;
pub use deduction::{Deduction, Mask};
pub use feedback::Feedback;
pub use observation::Observation;
