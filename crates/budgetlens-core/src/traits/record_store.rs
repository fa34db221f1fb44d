use crate::errors::StorageError;
use crate::models::{normalize_category, ProjectRecord};

/// Read access to the historical project records.
///
/// Slices preserve insertion order; several aggregates depend on it.
pub trait RecordStore: Send + Sync {
    /// Records whose category matches `category` (trimmed, case-insensitive).
    fn category_slice(&self, category: &str) -> Result<Vec<ProjectRecord>, StorageError>;

    /// `(label, count)` per distinct stored label, in order of first appearance.
    fn category_counts(&self) -> Result<Vec<(String, u64)>, StorageError>;

    fn record_count(&self) -> Result<u64, StorageError>;

    /// Every record in insertion order.
    fn all_records(&self) -> Result<Vec<ProjectRecord>, StorageError>;

    fn contains_category(&self, category: &str) -> Result<bool, StorageError> {
        let wanted = normalize_category(category);
        Ok(self
            .category_counts()?
            .iter()
            .any(|(label, _)| normalize_category(label) == wanted))
    }
}
