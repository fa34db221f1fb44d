use crate::errors::ClassifierError;
use crate::models::Classification;

/// What a classifier sees of a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierInput<'a> {
    pub title: &'a str,
    pub estimated_budget: u64,
}

/// Maps a project title and budget to one category label.
///
/// Implementations may block (HTTP, model inference); callers run them off
/// the async runtime.
pub trait CategoryClassifier: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Declared label set. Empty means any non-empty label is accepted.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    fn classify(&self, input: &ClassifierInput<'_>) -> Result<Classification, ClassifierError>;
}
