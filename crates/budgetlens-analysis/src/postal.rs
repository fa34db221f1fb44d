//! Postal code distribution.

use budgetlens_core::models::{PostalCodeCount, ProjectRecord};

/// One entry per distinct postal code, by descending count, ties by first appearance.
/// Records without a postal code are not counted.
pub fn postal_distribution(slice: &[ProjectRecord]) -> Vec<PostalCodeCount> {
    let mut counts: Vec<PostalCodeCount> = Vec::new();
    for record in slice.iter().filter(|r| !r.postal_code.trim().is_empty()) {
        match counts
            .iter_mut()
            .find(|c| c.postal_code == record.postal_code)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(PostalCodeCount {
                postal_code: record.postal_code.clone(),
                count: 1,
            }),
        }
    }
    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::RecordBuilder;

    #[test]
    fn test_descending_count_then_first_appearance() {
        let slice: Vec<ProjectRecord> = ["75020", "75011", "75019", "75011", "75019", "75001"]
            .iter()
            .map(|pc| RecordBuilder::new("Sport", 1).postal_code(pc).build())
            .collect();
        let dist = postal_distribution(&slice);
        let got: Vec<(&str, u64)> = dist.iter().map(|c| (c.postal_code.as_str(), c.count)).collect();
        assert_eq!(
            got,
            vec![("75011", 2), ("75019", 2), ("75020", 1), ("75001", 1)]
        );
    }

    #[test]
    fn test_counts_sum_to_records_with_postal_code() {
        let mut slice = test_fixtures::mixed_corpus();
        slice.push(RecordBuilder::new("Sport", 1).postal_code("").build());
        let with_code = slice.iter().filter(|r| !r.postal_code.trim().is_empty()).count();
        let total: u64 = postal_distribution(&slice).iter().map(|c| c.count).sum();
        assert_eq!(total, with_code as u64);
    }

    #[test]
    fn test_blank_postal_codes_are_skipped() {
        let slice: Vec<ProjectRecord> = ["", "75011", "  "]
            .iter()
            .map(|pc| RecordBuilder::new("Sport", 1).postal_code(pc).build())
            .collect();
        let dist = postal_distribution(&slice);
        assert_eq!(
            dist,
            vec![PostalCodeCount {
                postal_code: "75011".to_string(),
                count: 1
            }]
        );
    }
}
