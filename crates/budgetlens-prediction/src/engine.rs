//! PredictionEngine: validates, classifies, and assembles metrics for one
//! request under a single deadline.
//!
//! Classification and metrics both block (HTTP, SQLite, rayon), so each
//! stage runs on the blocking pool and is awaited with `timeout_at` against
//! the same request deadline.

use std::sync::Arc;
use std::time::Duration;

use budgetlens_analysis::MetricsOrchestrator;
use budgetlens_core::config::BudgetLensConfig;
use budgetlens_core::errors::{PredictionError, StorageError};
use budgetlens_core::models::{
    Classification, Metrics, PredictRequest, PredictedCategory, PredictionResponse,
    ValidatedRequest,
};
use budgetlens_core::traits::{CategoryClassifier, ClassifierInput, RecordStore};
use tokio::task::JoinError;
use tokio::time::Instant;
use tracing::Instrument;

use crate::cache::SliceCache;
use crate::classifier::validate_classification;

const STAGE_CLASSIFIER: &str = "classifier";
const STAGE_STORE: &str = "store";

/// Async prediction service over a record store and a category classifier.
pub struct PredictionEngine<S: RecordStore + 'static> {
    store: Arc<S>,
    classifier: Arc<dyn CategoryClassifier>,
    orchestrator: Arc<MetricsOrchestrator>,
    cache: Option<Arc<SliceCache>>,
    max_title_words: usize,
    request_timeout: Duration,
    classifier_timeout: Duration,
    min_confidence: f64,
}

impl<S: RecordStore + 'static> PredictionEngine<S> {
    pub fn new(
        store: Arc<S>,
        classifier: Arc<dyn CategoryClassifier>,
        config: &BudgetLensConfig,
    ) -> Self {
        let cache = config
            .cache
            .effective_enabled()
            .then(|| Arc::new(SliceCache::from_config(&config.cache)));
        Self {
            store,
            classifier,
            orchestrator: Arc::new(MetricsOrchestrator::from_config(config)),
            cache,
            max_title_words: config.prediction.effective_max_title_words(),
            request_timeout: config.prediction.effective_request_timeout(),
            classifier_timeout: config.classifier.effective_timeout(),
            min_confidence: config.classifier.effective_min_confidence(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The slice cache, if enabled.
    pub fn cache(&self) -> Option<&SliceCache> {
        self.cache.as_deref()
    }

    /// Drop cached slices. Call after every ingestion.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    /// Parse a JSON body and predict.
    pub async fn predict_json(&self, body: &str) -> Result<PredictionResponse, PredictionError> {
        let request = PredictRequest::from_json(body)?;
        self.predict(&request).await
    }

    /// Validate, classify, then assemble metrics for the predicted category.
    ///
    /// Validation failures return before the classifier is called.
    pub async fn predict(
        &self,
        request: &PredictRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        let validated = request.validate(self.max_title_words)?;
        let span = tracing::info_span!(
            "prediction",
            word_count = validated.word_count(),
            budget = validated.budget(),
            classifier_backend = self.classifier.name(),
        );
        self.run(validated).instrument(span).await
    }

    async fn run(&self, validated: ValidatedRequest) -> Result<PredictionResponse, PredictionError> {
        let start = Instant::now();
        let deadline = start + self.request_timeout;

        let classification = match self.classify(&validated, start, deadline).await {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "classification failed");
                return Err(e);
            }
        };

        let metrics = self
            .metrics(&classification.category, validated.budget(), start, deadline)
            .await?;

        tracing::info!(
            category = %classification.category,
            confidence = classification.confidence,
            has_metrics = metrics.is_some(),
            prediction_duration_ms = start.elapsed().as_millis() as u64,
            cache_hit_rate = self.cache().map_or(0.0, SliceCache::hit_rate),
            "prediction complete"
        );

        Ok(PredictionResponse {
            predicted_category: PredictedCategory {
                name: classification.category,
                confidence: classification.confidence,
                analyse: classification.rationale,
                project_title: validated.title().to_string(),
                estimated_budget: validated.budget(),
                metrics,
            },
        })
    }

    async fn classify(
        &self,
        validated: &ValidatedRequest,
        start: Instant,
        deadline: Instant,
    ) -> Result<Classification, PredictionError> {
        let classifier_deadline = deadline.min(start + self.classifier_timeout);
        let classifier = Arc::clone(&self.classifier);
        let title = validated.title().to_string();
        let estimated_budget = validated.budget();

        let task = tokio::task::spawn_blocking(move || {
            let input = ClassifierInput {
                title: &title,
                estimated_budget,
            };
            classifier.classify(&input)
        });

        let raw = match tokio::time::timeout_at(classifier_deadline, task).await {
            Ok(joined) => joined.map_err(|e| join_error(STAGE_CLASSIFIER, e))??,
            Err(_) => {
                return Err(PredictionError::Timeout {
                    stage: STAGE_CLASSIFIER,
                    timeout_ms: millis_between(start, classifier_deadline),
                })
            }
        };

        let labels = self.classifier.labels();
        Ok(validate_classification(raw, &labels, self.min_confidence)?)
    }

    async fn metrics(
        &self,
        category: &str,
        estimated_budget: u64,
        start: Instant,
        deadline: Instant,
    ) -> Result<Option<Metrics>, PredictionError> {
        let store = Arc::clone(&self.store);
        let orchestrator = Arc::clone(&self.orchestrator);
        let cache = self.cache.clone();
        let category = category.to_string();

        let task = tokio::task::spawn_blocking(move || {
            load_metrics(
                &*store,
                cache.as_deref(),
                &orchestrator,
                &category,
                estimated_budget,
            )
        });

        match tokio::time::timeout_at(deadline, task).await {
            Ok(joined) => Ok(joined.map_err(|e| join_error(STAGE_STORE, e))??),
            Err(_) => Err(PredictionError::Timeout {
                stage: STAGE_STORE,
                timeout_ms: millis_between(start, deadline),
            }),
        }
    }
}

fn load_metrics<S: RecordStore + ?Sized>(
    store: &S,
    cache: Option<&SliceCache>,
    orchestrator: &MetricsOrchestrator,
    category: &str,
    estimated_budget: u64,
) -> Result<Option<Metrics>, StorageError> {
    let counts: Arc<[(String, u64)]> = match cache {
        Some(cache) => cache.counts_or_load(|| store.category_counts())?,
        None => store.category_counts()?.into(),
    };
    if !orchestrator.is_known_category(category, &counts) {
        tracing::debug!(category, "category outside catalog, metrics omitted");
        return Ok(None);
    }

    let slice: Arc<[_]> = match cache {
        Some(cache) => cache.slice_or_load(category, || store.category_slice(category))?,
        None => store.category_slice(category)?.into(),
    };
    tracing::debug!(category, slice_size = slice.len(), "slice loaded");

    Ok(Some(orchestrator.compute(
        &slice,
        estimated_budget,
        category,
        &counts,
    )))
}

fn join_error(stage: &'static str, error: JoinError) -> PredictionError {
    if error.is_cancelled() {
        PredictionError::Cancelled { stage }
    } else {
        PredictionError::TaskFailed {
            stage,
            reason: error.to_string(),
        }
    }
}

fn millis_between(start: Instant, end: Instant) -> u64 {
    end.saturating_duration_since(start).as_millis() as u64
}
