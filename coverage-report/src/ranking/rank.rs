//! Coverage result ranking.

use std::cmp::Ordering;

use crate::coverage::CoverageResult;

/// Order two results best-first.
///
/// Higher percentage first; equal percentages order by label, then id.
pub fn compare_results(a: &CoverageResult, b: &CoverageResult) -> Ordering {
    b.percentage
        .total_cmp(&a.percentage)
        .then_with(|| a.label.cmp(&b.label))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank results by percentage, highest first.
///
/// The sort is stable and total, so the same input always yields the same
/// order.
pub fn rank_by_percentage(mut results: Vec<CoverageResult>) -> Vec<CoverageResult> {
    results.sort_by(compare_results);
    results
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn results() -> impl Strategy<Value = Vec<CoverageResult>> {
        prop::collection::vec(("[a-e]{1,3}", 0usize..20, 0usize..20), 0..30).prop_map(|rows| {
            rows.into_iter()
                .map(|(id, matched, total)| CoverageResult::new(id.clone(), id, matched, total))
                .collect()
        })
    }

    proptest! {
        /// Ranked output is sorted by percentage, descending.
        #[test]
        fn ranked_descending(input in results()) {
            let ranked = rank_by_percentage(input);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].percentage >= pair[1].percentage);
            }
        }

        /// Ranking is a permutation of its input.
        #[test]
        fn ranking_preserves_elements(input in results()) {
            let ranked = rank_by_percentage(input.clone());
            prop_assert_eq!(ranked.len(), input.len());
            for r in &input {
                prop_assert!(ranked.contains(r));
            }
        }

        /// Input order does not affect the result.
        #[test]
        fn order_independent(input in results()) {
            let mut reversed = input.clone();
            reversed.reverse();
            let a = rank_by_percentage(input);
            let b = rank_by_percentage(reversed);
            let key = |v: &[CoverageResult]| {
                v.iter().map(|r| (r.id.clone(), r.percentage)).collect::<Vec<_>>()
            };
            prop_assert_eq!(key(&a), key(&b));
        }
    }
}
