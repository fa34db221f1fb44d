//! Wiring from a loaded config to a ready store, classifier, and engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use budgetlens_core::config::{BudgetLensConfig, ClassifierBackend};
use budgetlens_core::errors::{IngestError, PredictionError};
use budgetlens_core::traits::{CategoryClassifier, RecordStore};
use budgetlens_storage::SqliteRecordStore;

use crate::classifier::{HttpClassifier, LexiconClassifier};
use crate::engine::PredictionEngine;

/// Open the configured database, ingesting the dataset export when the
/// store is still empty. Relative paths resolve against `root`.
pub fn open_store(root: &Path, config: &BudgetLensConfig) -> Result<SqliteRecordStore, IngestError> {
    let db_path = resolve(root, config.storage.effective_db_path());
    let store = SqliteRecordStore::open_with_pool_size(
        &db_path,
        config.storage.effective_read_pool_size(),
    )?;

    let existing = store.record_count()?;
    match config.storage.dataset_path.as_deref() {
        Some(dataset) if existing == 0 => {
            let report = store.ingest_csv(&resolve(root, dataset))?;
            if !report.is_clean() {
                tracing::warn!(
                    rows_rejected = report.rows_rejected(),
                    "dataset ingested with rejected rows"
                );
            }
        }
        Some(_) => {
            tracing::debug!(existing, "store already populated, skipping ingestion");
        }
        None if existing == 0 => {
            tracing::warn!(db = %db_path.display(), "store is empty and no dataset is configured");
        }
        None => {}
    }
    Ok(store)
}

/// Build the configured classifier backend.
pub fn build_classifier<S: RecordStore + ?Sized>(
    config: &BudgetLensConfig,
    store: &S,
) -> Result<Arc<dyn CategoryClassifier>, PredictionError> {
    match config.classifier.effective_backend() {
        ClassifierBackend::Lexicon => Ok(Arc::new(LexiconClassifier::from_store(store)?)),
        ClassifierBackend::Http => {
            let classifier = HttpClassifier::from_config(&config.classifier)?
                .with_labels(config.catalog.categories.clone());
            Ok(Arc::new(classifier))
        }
    }
}

/// Store, classifier, and engine in one step.
pub fn build_engine(
    root: &Path,
    config: &BudgetLensConfig,
) -> Result<PredictionEngine<SqliteRecordStore>, PredictionError> {
    let store = open_store(root, config)?;
    let classifier = build_classifier(config, &store)?;
    Ok(PredictionEngine::new(Arc::new(store), classifier, config))
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
