//! RecordStore behaviour shared by the SQLite and in-memory backends.

use budgetlens_core::traits::RecordStore;
use budgetlens_core::errors::IngestError;
use budgetlens_core::models::{ProjectRecord, ProjectStatus};
use budgetlens_storage::{InMemoryRecordStore, SqliteRecordStore};
use tempfile::TempDir;
use test_fixtures::{
    mixed_corpus, record, sample_csv_path, SAMPLE_REJECTED_ROWS, SAMPLE_VALID_ROWS,
};

fn stores(records: Vec<ProjectRecord>) -> Vec<(&'static str, Box<dyn RecordStore>)> {
    let sqlite = SqliteRecordStore::open_in_memory().unwrap();
    sqlite.insert_records(&records).unwrap();
    vec![
        ("sqlite", Box::new(sqlite)),
        ("memory", Box::new(InMemoryRecordStore::new(records))),
    ]
}

#[test]
fn test_slice_preserves_insertion_order() {
    for (name, store) in stores(mixed_corpus()) {
        let titles: Vec<String> = store
            .category_slice("Environnement")
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Végétaliser la rue",
                "Jardin partagé",
                "Composteurs de quartier",
                "Arbres et fraîcheur"
            ],
            "{name}"
        );
    }
}

#[test]
fn test_slice_matches_case_insensitively_on_trimmed_labels() {
    let mut records = mixed_corpus();
    records.push(record("  ENVIRONNEMENT ", 1_000));
    for (name, store) in stores(records) {
        assert_eq!(store.category_slice("environnement").unwrap().len(), 5, "{name}");
        assert_eq!(store.category_slice(" Environnement").unwrap().len(), 5, "{name}");
        assert!(store.category_slice("Environ").unwrap().is_empty(), "{name}");
    }
}

#[test]
fn test_category_counts_in_first_appearance_order() {
    for (name, store) in stores(mixed_corpus()) {
        assert_eq!(
            store.category_counts().unwrap(),
            vec![
                ("Environnement".to_string(), 4),
                ("Sport".to_string(), 3),
                ("Culture et patrimoine".to_string(), 1),
            ],
            "{name}"
        );
        assert_eq!(store.record_count().unwrap(), 8, "{name}");
        assert!(store.contains_category("sport").unwrap(), "{name}");
        assert!(!store.contains_category("Mobilité").unwrap(), "{name}");
    }
}

#[test]
fn test_unknown_category_gives_empty_slice() {
    for (name, store) in stores(mixed_corpus()) {
        assert!(store.category_slice("Mobilité").unwrap().is_empty(), "{name}");
    }
}

#[test]
fn test_sqlite_ingest_and_clear() {
    let dir = TempDir::new().unwrap();
    let store = SqliteRecordStore::open(&dir.path().join("budget.db")).unwrap();

    let report = store.ingest_csv(&sample_csv_path()).unwrap();
    assert_eq!(report.rows_read, SAMPLE_VALID_ROWS + SAMPLE_REJECTED_ROWS);
    assert_eq!(report.rows_accepted, SAMPLE_VALID_ROWS);
    assert_eq!(report.rows_rejected(), SAMPLE_REJECTED_ROWS);
    assert_eq!(store.record_count().unwrap(), SAMPLE_VALID_ROWS as u64);

    let culture = store.category_slice("Culture et patrimoine").unwrap();
    assert_eq!(culture[1].title, "Kiosque à musique; square du Temple");

    let env = store.category_slice("Environnement").unwrap();
    assert_eq!(env[1].status, ProjectStatus::Abandoned);
    assert_eq!(env[3].budget, 300_000);
    assert_eq!(env[4].status, ProjectStatus::InProgress);

    assert_eq!(store.clear().unwrap(), SAMPLE_VALID_ROWS);
    assert_eq!(store.record_count().unwrap(), 0);
}

#[test]
fn test_in_memory_from_csv_matches_sqlite_ingest() {
    let (memory, report) = InMemoryRecordStore::from_csv(&sample_csv_path()).unwrap();
    assert_eq!(report.rows_accepted, SAMPLE_VALID_ROWS);

    let sqlite = SqliteRecordStore::open_in_memory().unwrap();
    sqlite.ingest_csv(&sample_csv_path()).unwrap();
    assert_eq!(memory.all_records().unwrap(), sqlite.all_records().unwrap());
}

#[test]
fn test_ingest_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = InMemoryRecordStore::from_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn test_ingest_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();
    let err = InMemoryRecordStore::from_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyDataset { .. }));
}
