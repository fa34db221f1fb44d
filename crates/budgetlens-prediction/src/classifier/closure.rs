use budgetlens_core::errors::ClassifierError;
use budgetlens_core::models::Classification;
use budgetlens_core::traits::{CategoryClassifier, ClassifierInput};

/// Classifier backed by a closure.
pub struct FnClassifier<F> {
    name: String,
    labels: Vec<String>,
    f: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(&ClassifierInput<'_>) -> Result<Classification, ClassifierError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            f,
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}

impl<F> CategoryClassifier for FnClassifier<F>
where
    F: Fn(&ClassifierInput<'_>) -> Result<Classification, ClassifierError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    fn classify(&self, input: &ClassifierInput<'_>) -> Result<Classification, ClassifierError> {
        (self.f)(input)
    }
}
