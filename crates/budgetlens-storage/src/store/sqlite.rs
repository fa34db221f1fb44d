use std::path::Path;

use budgetlens_core::errors::{IngestError, StorageError};
use budgetlens_core::models::ProjectRecord;
use budgetlens_core::traits::RecordStore;

use crate::connection::DatabaseManager;
use crate::ingest::{self, IngestReport};
use crate::queries::projects;

/// SQLite-backed record store.
pub struct SqliteRecordStore {
    db: DatabaseManager,
}

impl SqliteRecordStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    pub fn open_with_pool_size(path: &Path, pool_size: usize) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_with_pool_size(path, pool_size)?,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Append records after the existing ones, keeping their order.
    pub fn insert_records(&self, records: &[ProjectRecord]) -> Result<usize, StorageError> {
        let inserted = self
            .db
            .with_writer(|conn| projects::insert_batch(conn, records))?;
        tracing::debug!(inserted, "inserted project records");
        Ok(inserted)
    }

    /// Load a CSV export and append its accepted rows.
    pub fn ingest_csv(&self, path: &Path) -> Result<IngestReport, IngestError> {
        let (records, report) = ingest::load_csv_file(path)?;
        self.insert_records(&records)?;
        self.db.checkpoint()?;
        tracing::info!(
            source = %report.source,
            rows_accepted = report.rows_accepted,
            rows_rejected = report.rows_rejected(),
            "dataset ingested"
        );
        Ok(report)
    }

    /// Remove every record.
    pub fn clear(&self) -> Result<usize, StorageError> {
        self.db.with_writer(projects::delete_all)
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

impl RecordStore for SqliteRecordStore {
    fn category_slice(&self, category: &str) -> Result<Vec<ProjectRecord>, StorageError> {
        self.db
            .with_reader(|conn| projects::query_by_category(conn, category))
    }

    fn category_counts(&self) -> Result<Vec<(String, u64)>, StorageError> {
        self.db.with_reader(projects::category_counts)
    }

    fn record_count(&self) -> Result<u64, StorageError> {
        self.db.with_reader(projects::count)
    }

    fn all_records(&self) -> Result<Vec<ProjectRecord>, StorageError> {
        self.db.with_reader(projects::query_all)
    }
}
