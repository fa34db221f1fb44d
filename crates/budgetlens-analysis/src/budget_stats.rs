//! Budget statistics: median, mean, extremes, and the top/bottom tables.

use budgetlens_core::models::{BudgetSummary, ProjectExample, ProjectRecord};
use budgetlens_core::ratio;
use statrs::statistics::Statistics;

/// Summarize the budgets of `slice`. `position` is left empty for the caller.
///
/// An empty slice yields [`BudgetSummary::empty`].
pub fn summarize(slice: &[ProjectRecord], top_n: usize) -> BudgetSummary {
    if slice.is_empty() {
        return BudgetSummary::empty();
    }

    let mut sorted: Vec<f64> = slice.iter().map(|r| r.budget as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let median = ratio::percentile(&sorted, 50.0).map(ratio::round_to_unit);
    let average = Some(ratio::round_to_unit(sorted.iter().mean()));
    let min = slice.iter().map(|r| r.budget).min();
    let max = slice.iter().map(|r| r.budget).max();

    let (most, least) = extremes(slice, top_n);

    BudgetSummary {
        median,
        average,
        min,
        max,
        five_most_expensive: most,
        five_least_expensive: least,
        position: Default::default(),
    }
}

/// `(most_expensive, least_expensive)` selected from a single ranking by
/// (budget asc, original index asc).
///
/// The least list is the head of the ranking; the most list is the tail,
/// shown by descending budget with original order kept among equal budgets.
/// Both lists are disjoint whenever the slice has at least `2 * n` records.
///
/// When equal budgets straddle the cut of the most expensive list, the later
/// records of the tie are kept, not the earliest: the earliest ones belong to
/// the head of the ranking. This gives up an earliest-first tie-break to keep
/// the lists disjoint when every budget is equal.
pub fn extremes(slice: &[ProjectRecord], n: usize) -> (Vec<ProjectExample>, Vec<ProjectExample>) {
    let mut ranking: Vec<usize> = (0..slice.len()).collect();
    // stable: equal budgets keep original order
    ranking.sort_by_key(|&i| slice[i].budget);

    let take = n.min(ranking.len());
    let least: Vec<ProjectExample> = ranking[..take]
        .iter()
        .map(|&i| ProjectExample::from(&slice[i]))
        .collect();

    let mut tail: Vec<usize> = ranking[ranking.len() - take..].to_vec();
    tail.sort_by(|&a, &b| slice[b].budget.cmp(&slice[a].budget).then(a.cmp(&b)));
    let most = tail
        .into_iter()
        .map(|i| ProjectExample::from(&slice[i]))
        .collect();

    (most, least)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::records_with_budgets;

    #[test]
    fn test_four_record_scenario() {
        let slice = records_with_budgets("Sport", &[1000, 2000, 3000, 4000]);
        let summary = summarize(&slice, 5);
        assert_eq!(summary.median, Some(2500));
        assert_eq!(summary.average, Some(2500));
        assert_eq!(summary.min, Some(1000));
        assert_eq!(summary.max, Some(4000));
    }

    #[test]
    fn test_odd_count_median_and_rounded_average() {
        let slice = records_with_budgets("Sport", &[10, 1, 2]);
        let summary = summarize(&slice, 5);
        assert_eq!(summary.median, Some(2));
        // 13 / 3 = 4.33
        assert_eq!(summary.average, Some(4));
    }

    #[test]
    fn test_half_unit_rounds_away_from_zero() {
        let slice = records_with_budgets("Sport", &[1, 2]);
        let summary = summarize(&slice, 5);
        assert_eq!(summary.median, Some(2));
        assert_eq!(summary.average, Some(2));
    }

    #[test]
    fn test_small_slice_returns_all_records_in_both_tables() {
        let slice = records_with_budgets("Sport", &[300, 100, 200]);
        let summary = summarize(&slice, 5);
        let most: Vec<u64> = summary.five_most_expensive.iter().map(|e| e.budget).collect();
        let least: Vec<u64> = summary.five_least_expensive.iter().map(|e| e.budget).collect();
        assert_eq!(most, vec![300, 200, 100]);
        assert_eq!(least, vec![100, 200, 300]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let slice = records_with_budgets("Sport", &[50, 50, 10, 50]);
        let (most, least) = extremes(&slice, 2);
        let most: Vec<&str> = most.iter().map(|e| e.title.as_str()).collect();
        let least: Vec<&str> = least.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(least, vec!["Sport #2", "Sport #0"]);
        assert_eq!(most, vec!["Sport #1", "Sport #3"]);
    }

    #[test]
    fn test_equal_budgets_still_disjoint_with_ten_records() {
        let slice = records_with_budgets("Sport", &[7; 10]);
        let (most, least) = extremes(&slice, 5);
        for example in &most {
            assert!(!least.contains(example));
        }
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(summarize(&[], 5), BudgetSummary::empty());
    }
}
