//! Share of every category across the whole corpus.

use budgetlens_core::models::{normalize_category, CategoryBreakdown};
use budgetlens_core::ratio;

/// Build the corpus-wide breakdown from `(label, count)` pairs.
///
/// Labels differing only in case or surrounding whitespace are merged under
/// the first label seen. Entries are ordered by descending count, then label;
/// percentages sum to 100 for a non-empty corpus.
pub fn category_breakdown(counts: &[(String, u64)], selected: &str) -> Vec<CategoryBreakdown> {
    let mut merged: Vec<(String, String, u64)> = Vec::new();
    for (label, count) in counts {
        let key = normalize_category(label);
        match merged.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, n)) => *n += count,
            None => merged.push((key, label.trim().to_string(), *count)),
        }
    }
    merged.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));

    let shares = ratio::percentages(&merged.iter().map(|m| m.2).collect::<Vec<_>>());
    let selected = normalize_category(selected);
    merged
        .into_iter()
        .zip(shares)
        .map(|((key, label, _), percentage)| CategoryBreakdown {
            category: label,
            percentage,
            selected: key == selected,
        })
        .collect()
}
