//! Simple interactive CLI mode
//!
//! Line-based solver without TUI. Reads observations, prints the remaining
//! candidates after each one.

use crate::config::SessionConfig;
use crate::core::Observation;
use crate::output::formatters::feedback_pegs;
use crate::solver::{Session, SessionState, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error or the session cannot be started.
pub fn run_simple<S: Strategy>(session: &mut Session<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple_with(session, &mut input, &mut output)
}

/// Run the simple interactive mode on any reader and writer
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error or the session cannot be started.
#[allow(clippy::too_many_lines)] // Interactive loop handles every state and command
pub fn run_simple_with<S, R, W>(session: &mut Session<S>, input: &mut R, out: &mut W) -> Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    print_banner(out, session.config())?;
    if session.state() == SessionState::Initialized {
        session.start()?;
    }

    let mut refresh = true;

    loop {
        if refresh {
            match session.state() {
                SessionState::Solved => {
                    print_solved(out, session)?;
                    let answer = prompt(input, out, "Play again? (yes/no)")?;
                    if matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                        session.reset()?;
                        writeln!(out, "\n🔄 New game started!\n")?;
                        continue;
                    }
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                SessionState::Exhausted => {
                    writeln!(out, "\n❌ No candidates remain! Some feedback may be incorrect.")?;
                    writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                }
                SessionState::Contradiction => {
                    writeln!(out, "\n❌ No candidates remain! The deductions contradict each other.")?;
                    writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                }
                SessionState::AwaitingFeedback => print_round(out, session)?,
                SessionState::Initialized => {
                    session.start()?;
                    continue;
                }
            }
        }
        refresh = false;

        let Some(line) = prompt(input, out, "Enter observation (or command)")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.reset()?;
                writeln!(out, "\n🔄 New game started!\n")?;
                refresh = true;
            }
            "undo" | "u" => {
                if session.undo() {
                    writeln!(
                        out,
                        "✓ Undone! Back to {} candidates\n",
                        session.remaining()
                    )?;
                    refresh = true;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            "list" | "l" => print_candidates(out, session, session.remaining())?,
            "help" | "h" | "?" => print_help(out, session.config())?,
            _ => {
                let applied = session
                    .parse_input(&line)
                    .and_then(|observation| session.observe(&observation));
                match applied {
                    Ok(_) => refresh = true,
                    Err(e) => writeln!(out, "❌ {e}\n")?,
                }
            }
        }
    }
}

fn print_banner<W: Write>(out: &mut W, config: &SessionConfig) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║             Bulls & Cows Assistant - Interactive Mode        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Secret: {} squares over '{}' ({} possible codes)\n",
        config.squares(),
        config.alphabet(),
        config.space_size()
    )?;
    print_help(out, config)
}

fn print_help<W: Write>(out: &mut W, config: &SessionConfig) -> io::Result<()> {
    let n = config.squares();
    writeln!(out, "Enter one observation per line:")?;
    writeln!(out, "  <guess> <bulls> <cows>   scored guess, e.g. '{} 1 2' or '{} 1b2c'", sample(config), sample(config))?;
    writeln!(out, "  <count><symbol>          symbol count, e.g. '2{}'", config.alphabet().symbols()[0])?;
    writeln!(out, "  <mask>                   {n} positions, '.' for unknown, e.g. '{}'", sample_mask(config))?;
    if config.auto_pick {
        writeln!(out, "  <bulls> <cows>           score for the suggested guess")?;
    }
    writeln!(out, "\nCommands: 'list', 'undo', 'new', 'help', 'quit'\n")
}

fn sample(config: &SessionConfig) -> String {
    config
        .alphabet()
        .symbols()
        .iter()
        .cycle()
        .take(config.squares())
        .collect()
}

fn sample_mask(config: &SessionConfig) -> String {
    let symbol = config.alphabet().symbols()[0];
    (0..config.squares())
        .map(|i| if i == 0 { symbol } else { '.' })
        .collect()
}

fn print_round<W: Write, S: Strategy>(out: &mut W, session: &Session<S>) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Round {}: {} candidates remaining",
        session.history().len() + 1,
        session.remaining()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    if let Some(guess) = session.suggestion() {
        writeln!(
            out,
            "\n📊 Suggested guess: {} ({} distinct symbols)\n",
            guess.to_string().bright_yellow().bold(),
            guess.distinct_symbols()
        )?;
    }

    if session.remaining() <= session.config().top {
        print_candidates(out, session, session.config().top)?;
    }
    Ok(())
}

fn print_candidates<W: Write, S: Strategy>(
    out: &mut W,
    session: &Session<S>,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "Remaining candidates:")?;
    for scored in session.ranked(limit) {
        writeln!(out, "  • {} ({})", scored.code, scored.score)?;
    }
    writeln!(out)
}

fn print_solved<W: Write, S: Strategy>(out: &mut W, session: &Session<S>) -> io::Result<()> {
    let rounds = session.history().len();
    let squares = session.config().squares();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "       🎉 🎊 ✨  C O D E   B R O K E N !  ✨ 🎊 🎉       "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    if let Some(secret) = session.solution() {
        writeln!(
            out,
            "\n  Secret {} found in {} {}",
            secret.to_string().bright_white().bold(),
            rounds.to_string().bright_cyan().bold(),
            if rounds == 1 { "round" } else { "rounds" }
        )?;
    }

    writeln!(out, "\n  History:")?;
    for (i, round) in session.history().iter().enumerate() {
        let pegs = match &round.observation {
            Observation::Result { feedback, .. } => feedback_pegs(*feedback, squares),
            Observation::Deduction(_) => String::new(),
        };
        writeln!(
            out,
            "    {}. {} {pegs}",
            (i + 1).to_string().bright_black(),
            round.observation
        )?;
    }

    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
