//! Benchmark command
//!
//! Plays a sample of secrets and measures how many guesses each takes.

use crate::config::SessionConfig;
use crate::core::{Code, Feedback};
use crate::error::SolverError;
use crate::solver::{CodeSpace, Session, SessionState, Strategy};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Pick `count` distinct secrets from the configured space
///
/// The same seed always yields the same secrets. Without a seed the
/// generator is seeded from the OS. Secrets come back sorted.
#[must_use]
pub fn sample_secrets(config: &SessionConfig, count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let space = CodeSpace::new(config.alphabet(), config.squares());
    let mut secrets = space.choose_multiple(&mut rng, count);
    secrets.sort();
    secrets
}

/// Run benchmark on a set of secrets
///
/// If `forced_first` is provided, it will be used as the first guess instead of
/// letting the strategy choose.
///
/// # Errors
///
/// Returns an error if a secret or the forced guess does not fit the
/// session's configuration.
pub fn run_benchmark<S: Strategy>(
    session: &mut Session<S>,
    secrets: &[Code],
    forced_first: Option<&Code>,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in secrets {
        secret.validate(session.config().alphabet(), session.config().squares())?;
        session.reset()?;
        let mut guesses = 0;

        loop {
            let guess = if let (0, Some(forced)) = (guesses, forced_first) {
                forced.clone()
            } else {
                match session.suggestion() {
                    Some(g) => g.clone(),
                    None => break,
                }
            };
            guesses += 1;

            let feedback = Feedback::evaluate(secret, &guess)?;
            if session.record_result(&guess, feedback.bulls(), feedback.cows())?
                == SessionState::Solved
            {
                break;
            }
        }

        debug!("benchmark: {secret} in {guesses} guesses");
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    if total_secrets == 0 {
        min_guesses = 0;
    }

    Ok(BenchmarkResult {
        total_secrets,
        total_guesses,
        average_guesses: if total_secrets == 0 {
            0.0
        } else {
            total_guesses as f64 / total_secrets as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
