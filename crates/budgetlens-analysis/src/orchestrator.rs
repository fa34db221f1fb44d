//! Metrics orchestrator: runs the aggregators over one slice and assembles
//! the `Metrics` object.

use budgetlens_core::config::{BudgetLensConfig, CatalogConfig};
use budgetlens_core::errors::StorageError;
use budgetlens_core::models::{normalize_category, CategoryBreakdown, Metrics, ProjectRecord};
use budgetlens_core::traits::RecordStore;

use crate::{breakdown, budget_stats, postal, quartiles, statuses};

/// Knobs for metrics assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsOptions {
    pub top_n: usize,
    pub abandoned_examples: usize,
    pub include_category_breakdown: bool,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self::from_config(&BudgetLensConfig::default())
    }
}

impl MetricsOptions {
    pub fn from_config(config: &BudgetLensConfig) -> Self {
        Self {
            top_n: config.prediction.effective_top_n(),
            abandoned_examples: config.prediction.effective_abandoned_examples(),
            include_category_breakdown: config.metrics.effective_include_category_breakdown(),
        }
    }
}

/// Stateless assembler of per-request metrics.
#[derive(Debug, Clone, Default)]
pub struct MetricsOrchestrator {
    options: MetricsOptions,
    catalog: CatalogConfig,
}

impl MetricsOrchestrator {
    pub fn new(options: MetricsOptions, catalog: CatalogConfig) -> Self {
        Self { options, catalog }
    }

    pub fn from_config(config: &BudgetLensConfig) -> Self {
        Self::new(MetricsOptions::from_config(config), config.catalog.clone())
    }

    pub fn options(&self) -> &MetricsOptions {
        &self.options
    }

    /// A category is known if it is configured or present in the store.
    pub fn is_known_category(&self, category: &str, store_counts: &[(String, u64)]) -> bool {
        let wanted = normalize_category(category);
        self.catalog.contains(category)
            || store_counts
                .iter()
                .any(|(label, _)| normalize_category(label) == wanted)
    }

    /// Fetch the slice for `category` and assemble its metrics.
    ///
    /// `Ok(None)` when the category is outside the catalog.
    pub fn assemble<S: RecordStore + ?Sized>(
        &self,
        store: &S,
        category: &str,
        estimated_budget: u64,
    ) -> Result<Option<Metrics>, StorageError> {
        let counts = store.category_counts()?;
        if !self.is_known_category(category, &counts) {
            tracing::debug!(category, "category outside catalog, metrics omitted");
            return Ok(None);
        }
        let slice = store.category_slice(category)?;
        Ok(Some(self.compute(&slice, estimated_budget, category, &counts)))
    }

    /// Compute metrics over an already fetched slice.
    ///
    /// `corpus_counts` feeds `breakdownByCategory`; the aggregators run in
    /// parallel over the borrowed slice.
    pub fn compute(
        &self,
        slice: &[ProjectRecord],
        estimated_budget: u64,
        category: &str,
        corpus_counts: &[(String, u64)],
    ) -> Metrics {
        if slice.is_empty() {
            let mut metrics = Metrics::empty();
            metrics.breakdown_by_category = self.breakdown(corpus_counts, category);
            return metrics;
        }

        let ((mut budget, position), ((statuses, priority_area), postal_code_distribution)) =
            rayon::join(
                || {
                    rayon::join(
                        || budget_stats::summarize(slice, self.options.top_n),
                        || quartiles::position(slice, estimated_budget),
                    )
                },
                || {
                    rayon::join(
                        || {
                            statuses::status_and_priority(slice, self.options.abandoned_examples)
                        },
                        || postal::postal_distribution(slice),
                    )
                },
            );
        budget.position = position;

        Metrics {
            starting_year: slice.iter().map(|r| r.year).min(),
            ending_year: slice.iter().map(|r| r.year).max(),
            number_of_records: slice.len() as u64,
            breakdown_by_category: self.breakdown(corpus_counts, category),
            postal_code_distribution,
            statuses,
            priority_area,
            budget,
        }
    }

    fn breakdown(&self, corpus_counts: &[(String, u64)], category: &str) -> Vec<CategoryBreakdown> {
        if self.options.include_category_breakdown {
            breakdown::category_breakdown(corpus_counts, category)
        } else {
            Vec::new()
        }
    }
}
