//! Request validation errors. Raised before any classification work.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("project title is empty")]
    EmptyTitle,

    #[error("project title has {count} words, maximum is {max}")]
    TooManyWords { count: usize, max: usize },

    #[error("estimated budget must be non-negative, got {value}")]
    NegativeBudget { value: i64 },

    #[error("estimated budget must be a number, got {found}")]
    NonNumericBudget { found: &'static str },

    #[error("estimated budget must be an integer, got {value}")]
    NonIntegerBudget { value: String },

    #[error("estimated budget is out of range: {value}")]
    BudgetOutOfRange { value: String },

    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    #[error("field {field} has invalid type {found}")]
    InvalidFieldType {
        field: &'static str,
        found: &'static str,
    },

    #[error("malformed request: {message}")]
    MalformedRequest { message: String },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
