//! Category slice cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
    /// Maximum cached category slices. Default: 256.
    pub max_slices: Option<u64>,
    /// Time-to-live of a cached slice in seconds. Default: 600.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(constants::DEFAULT_CACHE_ENABLED)
    }

    pub fn effective_max_slices(&self) -> u64 {
        self.max_slices
            .unwrap_or(constants::DEFAULT_CACHE_MAX_SLICES)
    }

    pub fn effective_ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs.unwrap_or(constants::DEFAULT_CACHE_TTL_SECS))
    }
}
