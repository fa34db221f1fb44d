//! # budgetlens-core
//!
//! Foundation crate for the budgetlens prediction engine.
//! Defines the record model, the prediction contract, errors, config,
//! tracing setup, and the collaborator traits. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod ratio;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BudgetLensConfig;
pub use errors::{
    ClassifierError, ConfigError, ErrorBody, ErrorCode, IngestError, PredictionError,
    StorageError, ValidationError,
};
pub use models::{
    Classification, Metrics, PredictRequest, PredictedCategory, PredictionResponse,
    PriorityArea, ProjectRecord, ProjectStatus, ValidatedRequest,
};
pub use traits::{CategoryClassifier, ClassifierInput, RecordStore};
