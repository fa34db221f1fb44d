//! Multinomial naive Bayes over historical project titles.

use std::collections::{HashMap, HashSet};

use budgetlens_core::errors::{ClassifierError, PredictionError};
use budgetlens_core::models::{normalize_category, Classification, ProjectRecord};
use budgetlens_core::ratio;
use budgetlens_core::traits::{CategoryClassifier, ClassifierInput, RecordStore};

use super::tokenize::tokenize;

struct CategoryModel {
    label: String,
    documents: u64,
    token_counts: HashMap<String, u64>,
    total_tokens: u64,
    median_budget: f64,
}

/// Naive Bayes classifier with Laplace smoothing, trained on stored titles.
///
/// The estimated budget only breaks exact score ties, in favour of the
/// category whose median budget is closest.
pub struct LexiconClassifier {
    categories: Vec<CategoryModel>,
    vocabulary: HashSet<String>,
    total_documents: u64,
}

impl LexiconClassifier {
    /// Train on `records`. Categories keep the first spelling seen.
    pub fn train(records: &[ProjectRecord]) -> Result<Self, ClassifierError> {
        if records.is_empty() {
            return Err(ClassifierError::EmptyModel);
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut categories: Vec<CategoryModel> = Vec::new();
        let mut budgets: Vec<Vec<f64>> = Vec::new();
        let mut vocabulary = HashSet::new();

        for record in records {
            let key = normalize_category(&record.category);
            let idx = *index.entry(key).or_insert_with(|| {
                categories.push(CategoryModel {
                    label: record.category.trim().to_string(),
                    documents: 0,
                    token_counts: HashMap::new(),
                    total_tokens: 0,
                    median_budget: 0.0,
                });
                budgets.push(Vec::new());
                categories.len() - 1
            });

            let model = &mut categories[idx];
            model.documents += 1;
            budgets[idx].push(record.budget as f64);
            for token in tokenize(&record.title) {
                model.total_tokens += 1;
                *model.token_counts.entry(token.clone()).or_insert(0) += 1;
                vocabulary.insert(token);
            }
        }

        for (model, mut category_budgets) in categories.iter_mut().zip(budgets) {
            category_budgets.sort_by(f64::total_cmp);
            model.median_budget = ratio::percentile(&category_budgets, 50.0).unwrap_or(0.0);
        }

        tracing::info!(
            categories = categories.len(),
            vocabulary = vocabulary.len(),
            documents = records.len(),
            "lexicon classifier trained"
        );

        Ok(Self {
            categories,
            vocabulary,
            total_documents: records.len() as u64,
        })
    }

    /// Train on every record of a store.
    pub fn from_store<S: RecordStore + ?Sized>(store: &S) -> Result<Self, PredictionError> {
        let records = store.all_records()?;
        Ok(Self::train(&records)?)
    }

    fn log_score(&self, model: &CategoryModel, tokens: &[&String]) -> f64 {
        let vocab = self.vocabulary.len() as f64;
        let prior = (model.documents as f64 / self.total_documents as f64).ln();
        let denominator = model.total_tokens as f64 + vocab;
        tokens.iter().fold(prior, |acc, token| {
            let count = model.token_counts.get(*token).copied().unwrap_or(0) as f64;
            acc + ((count + 1.0) / denominator).ln()
        })
    }
}

impl CategoryClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn labels(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.label.clone()).collect()
    }

    fn classify(&self, input: &ClassifierInput<'_>) -> Result<Classification, ClassifierError> {
        let tokens = tokenize(input.title);
        let known: Vec<&String> = tokens
            .iter()
            .filter(|t| self.vocabulary.contains(*t))
            .collect();
        if known.is_empty() {
            return Err(ClassifierError::UnrecognizedInput {
                reason: format!("no known word in {:?}", input.title),
            });
        }

        let scores: Vec<f64> = self
            .categories
            .iter()
            .map(|m| self.log_score(m, &known))
            .collect();
        let best_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let budget = input.estimated_budget as f64;
        let best = scores
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == best_score)
            .map(|(i, _)| i)
            .min_by(|&a, &b| {
                let da = (self.categories[a].median_budget - budget).abs();
                let db = (self.categories[b].median_budget - budget).abs();
                da.total_cmp(&db).then(a.cmp(&b))
            })
            .ok_or(ClassifierError::EmptyModel)?;

        // softmax over log scores
        let normalizer: f64 = scores.iter().map(|s| (s - best_score).exp()).sum();
        let confidence = (1.0 / normalizer).clamp(0.0, 1.0);
        let label = &self.categories[best].label;

        Ok(Classification::new(
            label.clone(),
            confidence,
            format!("Prédiction lexicale : {label} (confiance {confidence:.2})"),
        ))
    }
}
