//! Known category catalog.

use serde::{Deserialize, Serialize};

use crate::models::normalize_category;

/// Categories known even when the store holds no record for them yet.
/// The effective catalog is this list plus every category present in the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub categories: Vec<String>,
}

impl CatalogConfig {
    pub fn contains(&self, category: &str) -> bool {
        let wanted = normalize_category(category);
        self.categories
            .iter()
            .any(|c| normalize_category(c) == wanted)
    }
}
