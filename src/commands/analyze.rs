//! Code analysis command
//!
//! Shows how a guess would split the current candidates by feedback.

use crate::config::SessionConfig;
use crate::core::{Code, Feedback};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Result of analyzing a code
pub struct AnalysisResult {
    pub code: String,
    /// Distinct symbols, lower is preferred
    pub score: usize,
    /// 1-based position among the candidates by score
    pub rank: usize,
    pub is_candidate: bool,
    pub total_candidates: usize,
    /// Candidates per possible feedback, most bulls first
    pub partitions: Vec<(Feedback, usize)>,
    pub largest_partition: usize,
    pub expected_remaining: f64,
}

/// Analyze a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if the code does not fit the configured alphabet and
/// squares.
pub fn analyze_code(
    code: &str,
    config: &SessionConfig,
    candidates: &[Code],
) -> Result<AnalysisResult, SolverError> {
    let guess = Code::parse(code, config.alphabet(), config.squares())?;
    let score = guess.distinct_symbols();

    let mut groups: FxHashMap<Feedback, usize> = FxHashMap::default();
    for secret in candidates {
        *groups.entry(Feedback::evaluate(secret, &guess)?).or_insert(0) += 1;
    }

    let mut partitions: Vec<(Feedback, usize)> = groups.into_iter().collect();
    partitions.sort_by(|a, b| b.0.cmp(&a.0));

    let total_candidates = candidates.len();
    let largest_partition = partitions.iter().map(|&(_, size)| size).max().unwrap_or(0);
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        let squares: usize = partitions.iter().map(|&(_, size)| size * size).sum();
        squares as f64 / total_candidates as f64
    };

    Ok(AnalysisResult {
        code: guess.to_string(),
        score,
        rank: 1 + candidates
            .iter()
            .filter(|c| c.distinct_symbols() < score)
            .count(),
        is_candidate: candidates.contains(&guess),
        total_candidates,
        partitions,
        largest_partition,
        expected_remaining,
    })
}
