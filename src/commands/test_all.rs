//! Test all secrets - comprehensive solver evaluation
//!
//! Plays every code in the space (or the first `limit`) as a secret and
//! collects statistics. Games run in parallel, one session per worker.

use super::solve::{SolveConfig, solve_code};
use crate::error::SolverError;
use crate::solver::{CodeSpace, Session, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from playing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from playing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Size of the full code space, for the information summary
    pub space_size: usize,
    pub worst_secrets: Vec<(String, usize)>,
    pub first_guess_used: FxHashMap<String, usize>,
}

impl TestAllStatistics {
    /// Opening guesses by how often they were played, ties in code order
    #[must_use]
    pub fn top_first_guesses(&self, n: usize) -> Vec<(&str, usize)> {
        let mut used: Vec<(&str, usize)> = self
            .first_guess_used
            .iter()
            .map(|(code, &count)| (code.as_str(), count))
            .collect();
        used.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        used.truncate(n);
        used
    }
}

/// Run the solver on every secret in the session's space (or a prefix)
///
/// # Errors
///
/// Returns an error if the session cannot be started.
pub fn run_test_all<S>(
    session: &Session<S>,
    limit: Option<usize>,
    max_guesses: usize,
    show_progress: bool,
) -> Result<TestAllStatistics, SolverError>
where
    S: Strategy + Clone + Send + Sync,
{
    let config = session.config();
    let secrets: Vec<String> = CodeSpace::new(config.alphabet(), config.squares())
        .take(limit.unwrap_or(usize::MAX))
        .map(|code| code.to_string())
        .collect();

    let pb = if show_progress {
        println!("🎯 Testing {} secrets...", secrets.len());
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map_init(
            || session.clone(),
            |local, secret| {
                let mut solve_config = SolveConfig::new(secret.clone());
                solve_config.max_guesses = max_guesses;
                let solved = solve_code(solve_config, local);
                pb.inc(1);
                solved.map(|result| SecretTestResult {
                    secret: result.secret,
                    num_guesses: result.guesses.len(),
                    guesses: result.guesses.into_iter().map(|step| step.guess).collect(),
                    success: result.success,
                })
            },
        )
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(
        &results,
        total_start.elapsed(),
        config.space_size(),
    ))
}

fn summarize(results: &[SecretTestResult], total_time: Duration, space_size: usize) -> TestAllStatistics {
    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut first_guess_used: FxHashMap<String, usize> = FxHashMap::default();

    for result in results {
        if result.success {
            *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
        }
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
    }

    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_secrets: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        space_size,
        worst_secrets,
        first_guess_used,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let percent_of = |n: usize| {
        if stats.total_secrets == 0 {
            0.0
        } else {
            n as f64 / stats.total_secrets as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", percent_of(stats.solved)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", percent_of(stats.failed)).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:6} ({percentage:5.1}%)");
    }

    println!("\n🧮 Information");
    let total_bits = (stats.space_size.max(1) as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Code space:          {} codes, {total_bits:.2} bits", stats.space_size);
    println!("  Bits per guess:      {bits_per_guess:.2} bits");

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.yellow(), guesses);
        }
    }

    println!("\n🎯 First Guess Usage");
    for (code, count) in stats.top_first_guesses(5) {
        println!("  {code}: {count} times ({:.1}%)", percent_of(count));
    }
}
