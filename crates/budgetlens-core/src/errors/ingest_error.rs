//! Dataset ingestion errors. Per-row problems are collected in the ingest
//! report instead; these abort the whole load.

use super::error_code::{self, ErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("cannot read dataset {path}: {message}")]
    Io { path: String, message: String },

    #[error("dataset is empty: {path}")]
    EmptyDataset { path: String },

    #[error("dataset is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("malformed dataset at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            _ => error_code::INGEST_ERROR,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_retryable())
    }
}
