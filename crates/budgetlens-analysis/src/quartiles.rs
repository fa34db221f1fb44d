//! Quartile engine: four contiguous budget ranges and the position of a new budget.
//!
//! Boundaries are the 25th/50th/75th percentiles by linear interpolation,
//! rounded to the currency unit. Adjacent ranges share their boundary value,
//! and a budget equal to a boundary belongs to the lower quartile.

use budgetlens_core::constants::{QUARTILE_COUNT, QUARTILE_TEXT};
use budgetlens_core::models::{BudgetPosition, ProjectRecord, Quartile};
use budgetlens_core::ratio;

/// Build the four quartile ranges from the slice budgets. Empty slice gives `[]`.
pub fn quartile_ranges(budgets: &[u64]) -> Vec<Quartile> {
    if budgets.is_empty() {
        return Vec::new();
    }
    let mut sorted: Vec<f64> = budgets.iter().map(|&b| b as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let min = budgets.iter().copied().min().unwrap_or(0);
    let max = budgets.iter().copied().max().unwrap_or(0);
    let boundary = |p: f64| {
        ratio::percentile(&sorted, p)
            .map(ratio::round_to_unit)
            .unwrap_or(min)
            .clamp(min, max)
    };
    let edges = [min, boundary(25.0), boundary(50.0), boundary(75.0), max];

    (0..QUARTILE_COUNT)
        .map(|i| {
            let (label, description) = QUARTILE_TEXT[i];
            Quartile {
                quartile: (i + 1) as u8,
                label: label.to_string(),
                min: edges[i],
                max: edges[i + 1],
                description: description.to_string(),
            }
        })
        .collect()
}

/// Quartile index for `budget`: the first range whose upper bound is not
/// below it, Q1 below the minimum, Q4 above the maximum. `None` without ranges.
pub fn locate(budget: u64, quartiles: &[Quartile]) -> Option<u8> {
    let last = quartiles.last()?;
    Some(
        quartiles
            .iter()
            .find(|q| budget <= q.max)
            .unwrap_or(last)
            .quartile,
    )
}

/// Ranges plus the estimated budget's quartile.
pub fn position(slice: &[ProjectRecord], estimated_budget: u64) -> BudgetPosition {
    let budgets: Vec<u64> = slice.iter().map(|r| r.budget).collect();
    let quartiles = quartile_ranges(&budgets);
    let estimated_budget_quartile = locate(estimated_budget, &quartiles);
    BudgetPosition {
        quartiles,
        estimated_budget_quartile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_for_four_budgets() {
        let q = quartile_ranges(&[1000, 2000, 3000, 4000]);
        let bounds: Vec<(u64, u64)> = q.iter().map(|q| (q.min, q.max)).collect();
        assert_eq!(
            bounds,
            vec![(1000, 1750), (1750, 2500), (2500, 3250), (3250, 4000)]
        );
        assert_eq!(q[0].label, "Projets économiques");
        assert_eq!(q[3].label, "Projets ambitieux");
    }

    #[test]
    fn test_boundary_value_goes_to_lower_quartile() {
        let q = quartile_ranges(&[1000, 2000, 3000, 4000]);
        assert_eq!(locate(1750, &q), Some(1));
        assert_eq!(locate(1751, &q), Some(2));
        assert_eq!(locate(2500, &q), Some(2));
        assert_eq!(locate(3250, &q), Some(3));
    }

    #[test]
    fn test_outside_range_clamps_to_extremes() {
        let q = quartile_ranges(&[1000, 2000, 3000, 4000]);
        assert_eq!(locate(0, &q), Some(1));
        assert_eq!(locate(1_000_000, &q), Some(4));
    }

    #[test]
    fn test_single_budget_collapses_ranges() {
        let q = quartile_ranges(&[500]);
        assert_eq!(q.len(), 4);
        assert!(q.iter().all(|q| q.min == 500 && q.max == 500));
        assert_eq!(locate(500, &q), Some(1));
        assert_eq!(locate(501, &q), Some(4));
    }

    #[test]
    fn test_empty_slice_has_no_position() {
        let position = position(&[], 1000);
        assert!(position.quartiles.is_empty());
        assert_eq!(position.estimated_budget_quartile, None);
    }
}
