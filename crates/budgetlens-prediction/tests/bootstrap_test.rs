//! Config-driven store and classifier construction.

use budgetlens_core::config::{BudgetLensConfig, ClassifierBackend};
use budgetlens_core::errors::{ClassifierError, ErrorCode, PredictionError};
use budgetlens_core::models::PredictRequest;
use budgetlens_core::traits::{CategoryClassifier, RecordStore};
use budgetlens_prediction::bootstrap::{build_classifier, build_engine, open_store};
use budgetlens_storage::SqliteRecordStore;
use test_fixtures::{sample_csv_path, SAMPLE_VALID_ROWS};

fn config_with_dataset() -> BudgetLensConfig {
    let mut config = BudgetLensConfig::default();
    config.storage.db_path = Some("budgetlens.db".to_string());
    config.storage.dataset_path = Some(sample_csv_path().to_string_lossy().into_owned());
    config
}

#[test]
fn test_open_store_ingests_empty_database_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_dataset();

    let store = open_store(dir.path(), &config).unwrap();
    assert_eq!(store.record_count().unwrap(), SAMPLE_VALID_ROWS as u64);
    assert!(dir.path().join("budgetlens.db").exists());
    drop(store);

    let reopened = open_store(dir.path(), &config).unwrap();
    assert_eq!(reopened.record_count().unwrap(), SAMPLE_VALID_ROWS as u64);
}

#[test]
fn test_open_store_without_dataset_stays_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BudgetLensConfig::default();
    config.storage.db_path = Some("empty.db".to_string());

    let store = open_store(dir.path(), &config).unwrap();
    assert_eq!(store.record_count().unwrap(), 0);
}

#[test]
fn test_missing_dataset_is_an_ingest_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BudgetLensConfig::default();
    config.storage.db_path = Some("budgetlens.db".to_string());
    config.storage.dataset_path = Some("absent.csv".to_string());

    let err = build_engine(dir.path(), &config).err().unwrap();
    assert!(matches!(err, PredictionError::Ingest(_)));
    assert_eq!(err.error_code(), "INGEST_ERROR");
}

#[test]
fn test_lexicon_on_empty_store_fails() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    let err = build_classifier(&BudgetLensConfig::default(), &store).err().unwrap();
    assert!(matches!(
        err,
        PredictionError::Classifier(ClassifierError::EmptyModel)
    ));
}

#[test]
fn test_http_backend_requires_endpoint() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    let mut config = BudgetLensConfig::default();
    config.classifier.backend = Some(ClassifierBackend::Http);

    let err = build_classifier(&config, &store).err().unwrap();
    assert_eq!(err.error_code(), "CLASSIFIER_UNAVAILABLE");
}

#[test]
fn test_http_backend_declares_catalog_labels() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    let mut config = BudgetLensConfig::default();
    config.classifier.backend = Some(ClassifierBackend::Http);
    config.classifier.endpoint = Some("http://127.0.0.1:9".to_string());
    config.catalog.categories = vec!["Sport".to_string(), "Mobilité".to_string()];

    let classifier = build_classifier(&config, &store).unwrap();
    assert_eq!(classifier.name(), "http");
    assert_eq!(classifier.labels(), vec!["Sport", "Mobilité"]);
}

#[tokio::test]
async fn test_built_engine_predicts_from_sample_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let engine = build_engine(dir.path(), &config_with_dataset()).unwrap();

    let response = engine
        .predict(&PredictRequest::new("Terrain de basket", 200_000))
        .await
        .unwrap();
    let predicted = response.predicted_category;
    assert_eq!(predicted.name, "Sport");
    assert_eq!(predicted.metrics.unwrap().number_of_records, 3);
}
