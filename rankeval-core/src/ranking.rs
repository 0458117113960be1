use std::cmp::Ordering;

use crate::types::Scorable;

/// Stable sort by descending score, returning a new vector.
///
/// Stability matters: equal-scored items keep their input order, which makes
/// curve construction and the areas derived from it reproducible under
/// permutation of equal-score groups. Scores must be finite; NaN is a
/// precondition violation and leaves the order unspecified.
pub fn rank_order_by_score<S: Scorable + Clone>(items: &[S]) -> Vec<S> {
    let mut ranked = items.to_vec();
    rank_order_by_score_in_place(&mut ranked);
    ranked
}

/// In-place variant of [`rank_order_by_score`] for callers that want to avoid
/// duplicating a large dataset. Only the given slice is mutated.
pub fn rank_order_by_score_in_place<S: Scorable>(items: &mut [S]) {
    items.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScoredLabel, ScoredRecord};

    #[test]
    fn test_rank_order_descending() {
        let data: Vec<ScoredLabel> = [(0.1, false), (0.9, true), (0.5, false)]
            .into_iter()
            .map(Into::into)
            .collect();
        let ranked = rank_order_by_score(&data);
        let scores: Vec<f64> = ranked.iter().map(|sl| sl.score).collect();
        assert_eq!(scores, vec![0.9, 0.5, 0.1]);
    }

    #[test]
    fn test_rank_order_is_idempotent() {
        let data: Vec<ScoredLabel> = [(0.3, true), (0.7, false), (0.3, false), (0.1, true)]
            .into_iter()
            .map(Into::into)
            .collect();
        let once = rank_order_by_score(&data);
        let twice = rank_order_by_score(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_order_is_stable_on_ties() {
        let data = vec![
            ScoredRecord::new("first", 0.5, true),
            ScoredRecord::new("second", 0.5, false),
            ScoredRecord::new("third", 0.9, false),
        ];
        let ranked = rank_order_by_score(&data);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_in_place_matches_copying_variant() {
        let data: Vec<ScoredLabel> = [(0.2, false), (0.8, true), (0.4, true), (0.8, false)]
            .into_iter()
            .map(Into::into)
            .collect();
        let copied = rank_order_by_score(&data);
        let mut in_place = data;
        rank_order_by_score_in_place(&mut in_place);
        assert_eq!(copied, in_place);
    }
}
