use budgetlens_core::errors::ClassifierError;
use budgetlens_core::models::{normalize_category, Classification};

/// Enforce the classifier output contract.
///
/// Confidence must be finite, within `[0, 1]`, and not below
/// `min_confidence`. The label must be non-empty and, when `labels` is not
/// empty, one of them (trimmed, case-insensitive). The declared spelling
/// replaces the returned one.
pub fn validate_classification(
    mut classification: Classification,
    labels: &[String],
    min_confidence: f64,
) -> Result<Classification, ClassifierError> {
    let confidence = classification.confidence;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(ClassifierError::ConfidenceOutOfRange { confidence });
    }

    let category = classification.category.trim();
    if category.is_empty() {
        return Err(ClassifierError::InvalidResponse {
            reason: "empty category label".to_string(),
        });
    }
    if !labels.is_empty() {
        let wanted = normalize_category(category);
        let declared = labels
            .iter()
            .find(|l| normalize_category(l) == wanted)
            .ok_or_else(|| ClassifierError::UnknownCategory {
                category: category.to_string(),
            })?;
        classification.category = declared.trim().to_string();
    } else {
        classification.category = category.to_string();
    }

    if confidence < min_confidence {
        return Err(ClassifierError::LowConfidence {
            confidence,
            threshold: min_confidence,
        });
    }
    Ok(classification)
}
