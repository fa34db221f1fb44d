//! Per-request metrics computed over a category slice.
//!
//! Field names and nesting form the wire contract consumed by the browser
//! client; every struct serializes in camelCase and every optional value is
//! emitted as an explicit `null`.

use serde::{Deserialize, Serialize};

use super::record::ProjectRecord;
use crate::ratio;

/// Aggregates over the historical slice of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub starting_year: Option<i32>,
    pub ending_year: Option<i32>,
    pub number_of_records: u64,
    pub breakdown_by_category: Vec<CategoryBreakdown>,
    pub postal_code_distribution: Vec<PostalCodeCount>,
    pub statuses: Statuses,
    pub priority_area: PriorityCounts,
    pub budget: BudgetSummary,
}

impl Metrics {
    /// Well-formed metrics for a category with no historical records.
    pub fn empty() -> Self {
        Self {
            starting_year: None,
            ending_year: None,
            number_of_records: 0,
            breakdown_by_category: Vec::new(),
            postal_code_distribution: Vec::new(),
            statuses: Statuses::default(),
            priority_area: PriorityCounts::default(),
            budget: BudgetSummary::empty(),
        }
    }
}

/// Share of one category across the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub percentage: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalCodeCount {
    pub postal_code: String,
    pub count: u64,
}

/// Raw status counts; percentage conversion is left to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub abandoned: u64,
    pub in_progress: u64,
    pub completed: u64,
}

impl StatusCounts {
    pub fn total(&self) -> u64 {
        self.abandoned + self.in_progress + self.completed
    }

    /// Integer percentages summing to 100, or all zero for an empty slice.
    pub fn percentages(&self) -> StatusPercentages {
        let split = ratio::percentages(&[self.abandoned, self.in_progress, self.completed]);
        StatusPercentages {
            abandoned: split[0],
            in_progress: split[1],
            completed: split[2],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPercentages {
    pub abandoned: u32,
    pub in_progress: u32,
    pub completed: u32,
}

impl StatusPercentages {
    pub fn sum(&self) -> u32 {
        self.abandoned + self.in_progress + self.completed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statuses {
    pub pie_chart: StatusCounts,
    pub abandoned_examples: Vec<ProjectExample>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCounts {
    pub high_priority: u64,
    pub low_priority: u64,
}

impl PriorityCounts {
    pub fn total(&self) -> u64 {
        self.high_priority + self.low_priority
    }

    /// `(high, low)` integer percentages summing to 100, or `(0, 0)`.
    pub fn percentages(&self) -> (u32, u32) {
        let split = ratio::percentages(&[self.high_priority, self.low_priority]);
        (split[0], split[1])
    }
}

/// Compact view of a record for example tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectExample {
    pub title: String,
    pub budget: u64,
    /// Edition year, serialized as text for the client.
    pub year: String,
}

impl From<&ProjectRecord> for ProjectExample {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            budget: record.budget,
            year: record.year.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quartile {
    /// 1-based quartile index.
    pub quartile: u8,
    pub label: String,
    pub min: u64,
    pub max: u64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPosition {
    pub quartiles: Vec<Quartile>,
    pub estimated_budget_quartile: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub median: Option<u64>,
    pub average: Option<u64>,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub five_most_expensive: Vec<ProjectExample>,
    pub five_least_expensive: Vec<ProjectExample>,
    pub position: BudgetPosition,
}

impl BudgetSummary {
    /// No budget data: statistics absent, tables empty, position unknown.
    pub fn empty() -> Self {
        Self {
            median: None,
            average: None,
            min: None,
            max: None,
            five_most_expensive: Vec::new(),
            five_least_expensive: Vec::new(),
            position: BudgetPosition::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_percentages_are_zero() {
        let counts = StatusCounts::default();
        assert_eq!(counts.percentages().sum(), 0);
    }

    #[test]
    fn test_status_percentages_sum_to_hundred() {
        let counts = StatusCounts {
            abandoned: 1,
            in_progress: 1,
            completed: 1,
        };
        assert_eq!(counts.percentages().sum(), 100);
    }

    #[test]
    fn test_priority_percentages() {
        let counts = PriorityCounts {
            high_priority: 1,
            low_priority: 2,
        };
        assert_eq!(counts.percentages(), (33, 67));
        assert_eq!(PriorityCounts::default().percentages(), (0, 0));
    }
}
