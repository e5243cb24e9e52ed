//! Logger setup
//!
//! Logs go through the `log` facade. Line-based commands write to stderr;
//! the TUI owns the terminal, so it only logs when a file is given.

use anyhow::{Context, Result};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Map `-v` repetitions to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// With `log_file` set, everything goes to that file. Otherwise logs go to
/// stderr when `terminal` is true and are dropped when it is false.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger was
/// already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>, terminal: bool) -> Result<()> {
    let level = level_for(verbosity);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(level, Config::default(), file)?;
    } else if terminal {
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(())
}
