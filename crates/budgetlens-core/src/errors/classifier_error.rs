//! Category classifier errors.

use super::error_code::{self, ErrorCode};

/// Failures of the external classifier or of its output contract.
/// A wrong category is never returned silently: every doubt lands here.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("classifier rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("classifier returned an invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("classifier confidence {confidence} is outside [0, 1]")]
    ConfidenceOutOfRange { confidence: f64 },

    #[error("classifier confidence {confidence:.3} is below threshold {threshold:.3}")]
    LowConfidence { confidence: f64, threshold: f64 },

    #[error("classifier returned unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("unrecognized input: {reason}")]
    UnrecognizedInput { reason: String },

    #[error("classifier has no training data")]
    EmptyModel,
}

impl ErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::CLASSIFIER_UNAVAILABLE,
            _ => error_code::CLASSIFIER_ERROR,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
