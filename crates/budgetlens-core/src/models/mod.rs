//! Data model: historical records, request, metrics, and response.

pub mod metrics;
pub mod prediction;
pub mod record;
pub mod request;

pub use metrics::{
    BudgetPosition, BudgetSummary, CategoryBreakdown, Metrics, PostalCodeCount, PriorityCounts,
    ProjectExample, Quartile, StatusCounts, StatusPercentages, Statuses,
};
pub use prediction::{Classification, PredictedCategory, PredictionResponse};
pub use record::{normalize_category, PriorityArea, ProjectRecord, ProjectStatus};
pub use request::{PredictRequest, ValidatedRequest};
