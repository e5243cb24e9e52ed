//! Bulls & Cows Assistant
//!
//! Tracks every secret code still consistent with the feedback and
//! deductions seen so far, and suggests the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::config::SessionConfig;
//! use bulls_cows::core::Code;
//! use bulls_cows::solver::Session;
//!
//! let config = SessionConfig::new("rgbyop", 4).unwrap();
//! let mut session = Session::from_config(config);
//! session.start().unwrap();
//!
//! // rrgg scored one bull and one cow
//! let guess = Code::new("rrgg").unwrap();
//! session.record_result(&guess, 1, 1).unwrap();
//! println!("{} candidates left", session.remaining());
//! ```

// Core domain types
pub mod core;

// Candidate generation, filtering and ranking
pub mod solver;

// Session configuration
pub mod config;

// Error types
pub mod error;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
