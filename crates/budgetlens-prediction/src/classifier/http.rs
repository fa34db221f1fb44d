//! Classifier served by an external model over HTTP.

use std::time::Duration;

use budgetlens_core::config::ClassifierConfig;
use budgetlens_core::constants::CLASSIFY_PATH;
use budgetlens_core::errors::ClassifierError;
use budgetlens_core::models::Classification;
use budgetlens_core::traits::{CategoryClassifier, ClassifierInput};
use serde::{Deserialize, Serialize};

/// Body sent to `{endpoint}/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub project_title: String,
    pub estimated_budget: u64,
}

/// Body expected back from the model service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub analyse: String,
}

/// Blocking HTTP classifier. One attempt per call, no retry.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    endpoint: String,
    timeout: Duration,
    labels: Vec<String>,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            labels: Vec::new(),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ClassifierError::Unavailable {
                reason: "no classifier endpoint configured".to_string(),
            })?;
        Ok(Self::new(endpoint, config.effective_timeout()))
    }

    /// Restrict accepted labels. Empty means any label.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), CLASSIFY_PATH)
    }
}

impl CategoryClassifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    fn classify(&self, input: &ClassifierInput<'_>) -> Result<Classification, ClassifierError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClassifierError::Unavailable {
                reason: e.to_string(),
            })?;

        let body = ClassifyRequest {
            project_title: input.title.to_string(),
            estimated_budget: input.estimated_budget,
        };
        let url = self.url();
        let response = client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "classifier request failed");
                ClassifierError::Unavailable {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "classifier rejected request");
            return Err(ClassifierError::Rejected {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let parsed: ClassifyResponse =
            response
                .json()
                .map_err(|e| ClassifierError::InvalidResponse {
                    reason: e.to_string(),
                })?;
        Ok(Classification::new(parsed.name, parsed.confidence, parsed.analyse))
    }
}
