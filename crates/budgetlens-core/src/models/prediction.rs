//! Classifier output and the prediction response envelope.

use serde::{Deserialize, Serialize};

use super::metrics::Metrics;

/// What a category classifier returns on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Short natural-language rationale.
    pub rationale: String,
}

impl Classification {
    pub fn new(
        category: impl Into<String>,
        confidence: f64,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            confidence,
            rationale: rationale.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedCategory {
    pub name: String,
    pub confidence: f64,
    pub analyse: String,
    pub project_title: String,
    pub estimated_budget: u64,
    /// Absent only when the category is outside the known catalog.
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub predicted_category: PredictedCategory,
}

impl PredictionResponse {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
