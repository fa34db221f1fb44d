//! Request handling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictionConfig {
    /// Maximum words in a project title. Default: 15.
    pub max_title_words: Option<usize>,
    /// Deadline shared by the classifier and store stages. Default: 5000.
    pub request_timeout_ms: Option<u64>,
    /// Size of the most/least expensive tables. Default: 5.
    pub top_n: Option<usize>,
    /// Number of abandoned-project examples. Default: 5.
    pub abandoned_examples: Option<usize>,
}

impl PredictionConfig {
    pub fn effective_max_title_words(&self) -> usize {
        self.max_title_words
            .unwrap_or(constants::DEFAULT_MAX_TITLE_WORDS)
    }

    pub fn effective_request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .unwrap_or(constants::DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(constants::DEFAULT_TOP_N)
    }

    pub fn effective_abandoned_examples(&self) -> usize {
        self.abandoned_examples
            .unwrap_or(constants::DEFAULT_ABANDONED_EXAMPLES)
    }
}
