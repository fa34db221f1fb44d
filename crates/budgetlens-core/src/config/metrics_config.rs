//! Metrics assembly configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetricsConfig {
    /// Populate `breakdownByCategory` from the whole corpus. Default: true.
    pub include_category_breakdown: Option<bool>,
}

impl MetricsConfig {
    pub fn effective_include_category_breakdown(&self) -> bool {
        self.include_category_breakdown
            .unwrap_or(constants::DEFAULT_INCLUDE_CATEGORY_BREAKDOWN)
    }
}
