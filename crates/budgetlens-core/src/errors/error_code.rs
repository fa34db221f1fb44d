//! ErrorCode trait for the structured error boundary.

/// Every error enum implements this to provide a stable machine-readable
/// code alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Whether the caller may safely retry the same request.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CLASSIFIER_ERROR: &str = "CLASSIFIER_ERROR";
pub const CLASSIFIER_UNAVAILABLE: &str = "CLASSIFIER_UNAVAILABLE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CANCELLED: &str = "CANCELLED";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
