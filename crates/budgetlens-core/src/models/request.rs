//! Prediction request parsing and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// Raw request as sent by the client: `{ projectTitle, estimatedBudget }`.
///
/// The budget is kept signed so negative input can be reported precisely
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub project_title: String,
    pub estimated_budget: i64,
}

impl PredictRequest {
    pub fn new(project_title: impl Into<String>, estimated_budget: i64) -> Self {
        Self {
            project_title: project_title.into(),
            estimated_budget,
        }
    }

    /// Parse a JSON request body, rejecting non-numeric and fractional budgets.
    pub fn from_json(body: &str) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ValidationError::MalformedRequest {
                message: e.to_string(),
            })?;
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::MalformedRequest {
                message: "request body must be a JSON object".to_string(),
            })?;

        let project_title = match object.get("projectTitle") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(ValidationError::InvalidFieldType {
                    field: "projectTitle",
                    found: json_type_name(other),
                })
            }
            None => return Err(ValidationError::MissingField { field: "projectTitle" }),
        };

        let estimated_budget = match object.get("estimatedBudget") {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_i64() {
                    v
                } else if n.as_u64().is_some() {
                    return Err(ValidationError::BudgetOutOfRange {
                        value: n.to_string(),
                    });
                } else {
                    return Err(ValidationError::NonIntegerBudget {
                        value: n.to_string(),
                    });
                }
            }
            Some(other) => {
                return Err(ValidationError::NonNumericBudget {
                    found: json_type_name(other),
                })
            }
            None => return Err(ValidationError::MissingField { field: "estimatedBudget" }),
        };

        Ok(Self {
            project_title,
            estimated_budget,
        })
    }

    /// Check the word limit and budget sign. No classification happens before this.
    pub fn validate(&self, max_title_words: usize) -> Result<ValidatedRequest, ValidationError> {
        let title = self.project_title.trim();
        let word_count = title.split_whitespace().count();
        if word_count == 0 {
            return Err(ValidationError::EmptyTitle);
        }
        if word_count > max_title_words {
            return Err(ValidationError::TooManyWords {
                count: word_count,
                max: max_title_words,
            });
        }
        if self.estimated_budget < 0 {
            return Err(ValidationError::NegativeBudget {
                value: self.estimated_budget,
            });
        }

        Ok(ValidatedRequest {
            title: title.to_string(),
            budget: self.estimated_budget as u64,
            word_count,
        })
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    title: String,
    budget: u64,
    word_count: usize,
}

impl ValidatedRequest {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
