//! Guarded numeric helpers shared by every aggregator.
//!
//! All zero-denominator and empty-input handling lives here so percentages,
//! percentiles, and currency rounding behave identically across the engine.

/// Split `counts` into integer percentages using the largest-remainder method.
///
/// The result always sums to exactly 100 when at least one count is non-zero,
/// and is all zeros when the total is zero. Equal remainders favour the
/// earlier position.
pub fn percentages(counts: &[u64]) -> Vec<u32> {
    let total: u128 = counts.iter().map(|&c| c as u128).sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut floors = Vec::with_capacity(counts.len());
    let mut remainders = Vec::with_capacity(counts.len());
    for (idx, &count) in counts.iter().enumerate() {
        let scaled = count as u128 * 100;
        floors.push((scaled / total) as u32);
        remainders.push((idx, scaled % total));
    }

    let assigned: u32 = floors.iter().sum();
    let missing = 100u32.saturating_sub(assigned) as usize;

    // Stable sort keeps earlier positions first among equal remainders.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));
    for &(idx, _) in remainders.iter().take(missing) {
        floors[idx] += 1;
    }
    floors
}

/// Percentile of an ascending-sorted slice using linear interpolation
/// between closest ranks (rank = p/100 * (n - 1)).
///
/// Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        len => {
            let rank = (p.clamp(0.0, 100.0) / 100.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let frac = rank - lower as f64;
            if upper >= len {
                Some(sorted[len - 1])
            } else {
                Some(sorted[lower] * (1.0 - frac) + sorted[upper] * frac)
            }
        }
    }
}

/// Round a monetary amount to the nearest currency unit (half away from zero).
/// Negative and non-finite inputs clamp to 0.
pub fn round_to_unit(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_sum_to_hundred() {
        let split = percentages(&[1, 1, 1]);
        assert_eq!(split.iter().sum::<u32>(), 100);
        assert_eq!(split, vec![34, 33, 33]);
    }

    #[test]
    fn test_percentages_zero_total() {
        assert_eq!(percentages(&[0, 0, 0]), vec![0, 0, 0]);
        assert!(percentages(&[]).is_empty());
    }

    #[test]
    fn test_percentages_exact_split() {
        assert_eq!(percentages(&[1, 3]), vec![25, 75]);
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let sorted = [1000.0, 2000.0, 3000.0, 4000.0];
        assert_eq!(percentile(&sorted, 25.0), Some(1750.0));
        assert_eq!(percentile(&sorted, 50.0), Some(2500.0));
        assert_eq!(percentile(&sorted, 75.0), Some(3250.0));
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[7.0], 90.0), Some(7.0));
    }

    #[test]
    fn test_round_to_unit() {
        assert_eq!(round_to_unit(2.5), 3);
        assert_eq!(round_to_unit(2.4), 2);
        assert_eq!(round_to_unit(-4.0), 0);
        assert_eq!(round_to_unit(f64::NAN), 0);
    }
}
