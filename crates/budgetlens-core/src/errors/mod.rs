//! Error handling for budgetlens.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classifier_error;
pub mod config_error;
pub mod error_code;
pub mod ingest_error;
pub mod prediction_error;
pub mod storage_error;
pub mod validation_error;

pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use ingest_error::IngestError;
pub use prediction_error::{ErrorBody, PredictionError};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
