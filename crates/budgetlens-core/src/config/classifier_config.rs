//! Category classifier configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which classifier backend serves predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Naive Bayes over historical titles, built in-process.
    #[default]
    Lexicon,
    /// External model service reached over HTTP.
    Http,
}

impl std::str::FromStr for ClassifierBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" => Ok(Self::Lexicon),
            "http" => Ok(Self::Http),
            other => Err(format!("unknown classifier backend: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    pub backend: Option<ClassifierBackend>,
    /// Base URL of the model service (required for the `http` backend).
    pub endpoint: Option<String>,
    /// Per-call HTTP timeout. Default: 3000.
    pub timeout_ms: Option<u64>,
    /// Predictions below this confidence are rejected. Default: 0.0.
    pub min_confidence: Option<f64>,
}

impl ClassifierConfig {
    pub fn effective_backend(&self) -> ClassifierBackend {
        self.backend.unwrap_or_default()
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(
            self.timeout_ms
                .unwrap_or(constants::DEFAULT_CLASSIFIER_TIMEOUT_MS),
        )
    }

    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence
            .unwrap_or(constants::DEFAULT_MIN_CONFIDENCE)
    }
}
