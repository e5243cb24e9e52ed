//! Candidate scoring and ranking
//!
//! A candidate's score is its number of distinct symbols. Lower scores rank
//! first: a guess made of few symbols pins down their counts quickly. This is
//! a heuristic, not an optimal guess policy.

use crate::core::Code;

/// A candidate with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub code: Code,
    pub score: usize,
}

/// Score every candidate and sort ascending
///
/// The sort is stable: equal scores keep generation order.
///
/// # Examples
/// ```
/// use bulls_cows::core::Alphabet;
/// use bulls_cows::solver::{generate, score};
///
/// let candidates = generate(&Alphabet::new("ab").unwrap(), 2).unwrap();
/// let ranked: Vec<String> = score(&candidates).iter().map(|s| s.code.to_string()).collect();
/// assert_eq!(ranked, ["aa", "bb", "ab", "ba"]);
/// ```
#[must_use]
pub fn score(candidates: &[Code]) -> Vec<Scored> {
    let mut scored: Vec<Scored> = candidates
        .iter()
        .map(|code| Scored {
            code: code.clone(),
            score: code.distinct_symbols(),
        })
        .collect();
    scored.sort_by_key(|s| s.score);
    scored
}

/// The first `k` entries of the ranking
#[must_use]
pub fn top(candidates: &[Code], k: usize) -> Vec<Scored> {
    let mut ranked = score(candidates);
    ranked.truncate(k);
    ranked
}

/// The best-ranked candidate, without building the full ranking
#[must_use]
pub fn best(candidates: &[Code]) -> Option<&Code> {
    // min_by_key returns the first of several equal minima
    candidates.iter().min_by_key(|code| code.distinct_symbols())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::generate;

    fn space(symbols: &str, length: usize) -> Vec<Code> {
        generate(&Alphabet::new(symbols).unwrap(), length).unwrap()
    }

    #[test]
    fn score_two_by_two() {
        let ranked = score(&space("ab", 2));
        let pairs: Vec<(String, usize)> = ranked
            .iter()
            .map(|s| (s.code.to_string(), s.score))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("aa".to_string(), 1),
                ("bb".to_string(), 1),
                ("ab".to_string(), 2),
                ("ba".to_string(), 2),
            ]
        );
    }

    #[test]
    fn score_is_sorted_ascending() {
        let ranked = score(&space("rgby", 3));
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(ranked.len(), 64);
    }

    #[test]
    fn top_truncates() {
        let ranked = top(&space("rgb", 3), 3);
        let codes: Vec<String> = ranked.iter().map(|s| s.code.to_string()).collect();
        assert_eq!(codes, ["rrr", "ggg", "bbb"]);
    }

    #[test]
    fn top_larger_than_set() {
        assert_eq!(top(&space("ab", 2), 10).len(), 4);
    }

    #[test]
    fn best_agrees_with_ranking() {
        let candidates = space("rgb", 3);
        let kept: Vec<Code> = candidates.into_iter().filter(|c| c.symbol_at(0) != 'r').collect();
        assert_eq!(best(&kept), Some(&score(&kept)[0].code));
    }

    #[test]
    fn best_of_empty_is_none() {
        assert_eq!(best(&[]), None);
        assert!(score(&[]).is_empty());
    }
}
