//! Structured span field names shared across budgetlens crates.

/// Prediction: wall time of one request in milliseconds.
pub const PREDICTION_DURATION_MS: &str = "prediction_duration_ms";

/// Classifier: backend name serving the request.
pub const CLASSIFIER_BACKEND: &str = "classifier_backend";

/// Store: number of records in the category slice.
pub const SLICE_SIZE: &str = "slice_size";

/// Cache: slice cache hit rate (0.0 - 1.0).
pub const CACHE_HIT_RATE: &str = "cache_hit_rate";

/// Ingest: rows accepted from a dataset export.
pub const ROWS_INGESTED: &str = "rows_ingested";
