//! Record store configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file. Default: `budgetlens.db`.
    pub db_path: Option<String>,
    /// Dataset export to ingest when the database is empty.
    pub dataset_path: Option<String>,
    /// Number of read connections in the pool. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path
            .as_deref()
            .unwrap_or(constants::DEFAULT_DB_FILENAME)
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size
            .unwrap_or(constants::DEFAULT_READ_POOL_SIZE)
    }
}
