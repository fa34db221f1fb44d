use std::path::Path;

use budgetlens_core::errors::{IngestError, StorageError};
use budgetlens_core::models::{normalize_category, ProjectRecord};
use budgetlens_core::traits::RecordStore;

use crate::ingest::{self, IngestReport};

/// Immutable record store held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<ProjectRecord>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv(path: &Path) -> Result<(Self, IngestReport), IngestError> {
        let (records, report) = ingest::load_csv_file(path)?;
        Ok((Self::new(records), report))
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }
}

impl RecordStore for InMemoryRecordStore {
    fn category_slice(&self, category: &str) -> Result<Vec<ProjectRecord>, StorageError> {
        let wanted = normalize_category(category);
        Ok(self
            .records
            .iter()
            .filter(|r| normalize_category(&r.category) == wanted)
            .cloned()
            .collect())
    }

    fn category_counts(&self) -> Result<Vec<(String, u64)>, StorageError> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(label, _)| *label == record.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((record.category.clone(), 1)),
            }
        }
        Ok(counts)
    }

    fn record_count(&self) -> Result<u64, StorageError> {
        Ok(self.records.len() as u64)
    }

    fn all_records(&self) -> Result<Vec<ProjectRecord>, StorageError> {
        Ok(self.records.clone())
    }
}
