//! Candidate filtering
//!
//! Every filter is pure: it borrows the current candidate set and returns a
//! new, order-preserving subset. An empty result is a contradiction for the
//! caller to report, not an error.

use crate::core::{Code, Deduction, Feedback, Mask};
use crate::error::SolverError;
use log::debug;
use rayon::prelude::*;

/// Sets at least this large are filtered in parallel
const PARALLEL_THRESHOLD: usize = 4096;

fn retain<F>(candidates: &[Code], keep: F) -> Vec<Code>
where
    F: Fn(&Code) -> bool + Sync,
{
    if candidates.len() >= PARALLEL_THRESHOLD {
        candidates.par_iter().filter(|c| keep(c)).cloned().collect()
    } else {
        candidates.iter().filter(|c| keep(c)).cloned().collect()
    }
}

fn check_length(candidates: &[Code], actual: usize) -> Result<(), SolverError> {
    match candidates.first() {
        Some(first) if first.len() != actual => Err(SolverError::LengthMismatch {
            expected: first.len(),
            actual,
        }),
        _ => Ok(()),
    }
}

/// Keep candidates containing `symbol` exactly `count` times
#[must_use]
pub fn filter_by_count(candidates: &[Code], symbol: char, count: usize) -> Vec<Code> {
    let kept = retain(candidates, |c| c.count_of(symbol) == count);
    debug!(
        "count filter {count}{symbol}: {} -> {}",
        candidates.len(),
        kept.len()
    );
    kept
}

/// Keep candidates matching every pinned position of `mask`
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the mask length differs from the
/// candidates' length. An empty set has no length to compare against, so any
/// mask yields an empty result; callers validate masks against the
/// configuration first.
pub fn filter_by_position(candidates: &[Code], mask: &Mask) -> Result<Vec<Code>, SolverError> {
    check_length(candidates, mask.len())?;
    let kept = retain(candidates, |c| mask.matches(c));
    debug!(
        "positional filter {mask}: {} -> {}",
        candidates.len(),
        kept.len()
    );
    Ok(kept)
}

/// Keep candidates that would score `guess` with exactly `bulls` and `cows`
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the guess length differs from the
/// candidates' length. Never raised for an empty set.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Alphabet, Code};
/// use bulls_cows::solver::{filter_by_result, generate};
///
/// let alphabet = Alphabet::new("rgb").unwrap();
/// let candidates = generate(&alphabet, 3).unwrap();
/// let guess = Code::new("rgb").unwrap();
///
/// let kept = filter_by_result(&candidates, &guess, 1, 1).unwrap();
/// assert!(!kept.contains(&guess));
/// ```
pub fn filter_by_result(
    candidates: &[Code],
    guess: &Code,
    bulls: usize,
    cows: usize,
) -> Result<Vec<Code>, SolverError> {
    check_length(candidates, guess.len())?;
    let observed = Feedback::new(bulls, cows);
    let kept = retain(candidates, |c| {
        Feedback::evaluate(c, guess).is_ok_and(|feedback| feedback == observed)
    });
    debug!(
        "result filter {guess} {observed}: {} -> {}",
        candidates.len(),
        kept.len()
    );
    Ok(kept)
}

/// Apply a deduction, dispatching on its form
///
/// # Errors
/// Returns `SolverError::LengthMismatch` for a mask of the wrong length.
pub fn apply_deduction(candidates: &[Code], deduction: &Deduction) -> Result<Vec<Code>, SolverError> {
    match deduction {
        Deduction::Count { count, symbol } => Ok(filter_by_count(candidates, *symbol, *count)),
        Deduction::Positional(mask) => filter_by_position(candidates, mask),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::generate;

    fn space(symbols: &str, length: usize) -> Vec<Code> {
        generate(&Alphabet::new(symbols).unwrap(), length).unwrap()
    }

    fn texts(codes: &[Code]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn count_filter_two_reds() {
        let kept = filter_by_count(&space("rg", 3), 'r', 2);
        assert_eq!(texts(&kept), ["rrg", "rgr", "grr"]);
    }

    #[test]
    fn count_filter_zero() {
        let kept = filter_by_count(&space("rg", 3), 'r', 0);
        assert_eq!(texts(&kept), ["ggg"]);
    }

    #[test]
    fn count_filter_unsatisfiable_empties() {
        assert!(filter_by_count(&space("rg", 3), 'r', 4).is_empty());
    }

    #[test]
    fn positional_filter_middle_red() {
        let kept = filter_by_position(&space("rgb", 3), &Mask::new(".r.")).unwrap();
        assert_eq!(kept.len(), 9);
        assert!(kept.iter().all(|c| c.symbol_at(1) == 'r'));
    }

    #[test]
    fn positional_filter_all_wildcards_keeps_everything() {
        let candidates = space("rgb", 3);
        let kept = filter_by_position(&candidates, &Mask::new("...")).unwrap();
        assert_eq!(kept, candidates);
    }

    #[test]
    fn positional_filter_length_mismatch() {
        let result = filter_by_position(&space("rgb", 3), &Mask::new(".r"));
        assert_eq!(
            result,
            Err(SolverError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn result_filter_rgb_one_one() {
        let candidates = space("rgb", 3);
        let guess = Code::new("rgb").unwrap();
        let kept = filter_by_result(&candidates, &guess, 1, 1).unwrap();

        assert!(!kept.contains(&guess));
        assert!(!kept.is_empty());
        for code in &kept {
            assert_eq!(Feedback::evaluate(code, &guess).unwrap(), Feedback::new(1, 1));
        }

        let expected: Vec<&Code> = candidates
            .iter()
            .filter(|c| Feedback::evaluate(c, &guess).unwrap() == Feedback::new(1, 1))
            .collect();
        assert_eq!(kept.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn result_filter_solved_keeps_only_guess() {
        let guess = Code::new("gbr").unwrap();
        let kept = filter_by_result(&space("rgb", 3), &guess, 3, 0).unwrap();
        assert_eq!(kept, vec![guess]);
    }

    #[test]
    fn result_filter_length_mismatch() {
        let guess = Code::new("rgbr").unwrap();
        assert!(matches!(
            filter_by_result(&space("rgb", 3), &guess, 0, 0),
            Err(SolverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn filters_on_empty_set_stay_empty() {
        let empty: Vec<Code> = Vec::new();
        let guess = Code::new("rgb").unwrap();
        assert!(filter_by_result(&empty, &guess, 1, 1).unwrap().is_empty());
        assert!(filter_by_count(&empty, 'r', 1).is_empty());
        // No candidate to measure against, so no length check either
        assert!(filter_by_position(&empty, &Mask::new("r.")).unwrap().is_empty());
        assert!(filter_by_position(&empty, &Mask::new("r....")).unwrap().is_empty());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        // 6^5 = 7776 codes crosses the parallel threshold
        let candidates = space("rgbyop", 5);
        assert!(candidates.len() >= PARALLEL_THRESHOLD);
        let guess = Code::new("rrgby").unwrap();

        let parallel = filter_by_result(&candidates, &guess, 1, 2).unwrap();
        let sequential: Vec<Code> = candidates
            .iter()
            .filter(|c| Feedback::evaluate(c, &guess).unwrap() == Feedback::new(1, 2))
            .cloned()
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn apply_dispatches_on_form() {
        let candidates = space("rg", 3);
        let by_count =
            apply_deduction(&candidates, &Deduction::Count { count: 3, symbol: 'g' }).unwrap();
        assert_eq!(texts(&by_count), ["ggg"]);

        let by_mask = apply_deduction(&candidates, &Deduction::Positional(Mask::new("r.r"))).unwrap();
        assert_eq!(texts(&by_mask), ["rrr", "rgr"]);
    }
}
