//! Top-level prediction errors and the structured error body.

use serde::{Deserialize, Serialize};

use super::error_code::{self, ErrorCode};
use super::{ClassifierError, IngestError, StorageError, ValidationError};

/// Errors a prediction request can end with.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("{stage} timed out after {timeout_ms}ms")]
    Timeout { stage: &'static str, timeout_ms: u64 },

    #[error("{stage} was cancelled")]
    Cancelled { stage: &'static str },

    #[error("{stage} task failed: {reason}")]
    TaskFailed { stage: &'static str, reason: String },
}

impl ErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Classifier(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Cancelled { .. } => error_code::CANCELLED,
            Self::TaskFailed { .. } => error_code::INTERNAL_ERROR,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Classifier(e) => e.is_retryable(),
            Self::Storage(e) => e.is_retryable(),
            Self::Ingest(e) => e.is_retryable(),
            Self::Timeout { .. } | Self::Cancelled { .. } => true,
            Self::TaskFailed { .. } => false,
        }
    }
}

impl PredictionError {
    /// Structured error object handed to the caller in place of a response.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.error_code().to_string(),
            message: self.to_string(),
            retryable: self.is_retryable(),
        }
    }
}

/// User-visible failure: `{ code, message, retryable }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}
