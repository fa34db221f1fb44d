//! # budgetlens-analysis
//!
//! Pure aggregators over an immutable category slice, and the orchestrator
//! that runs them in parallel and assembles [`Metrics`](budgetlens_core::Metrics).

pub mod breakdown;
pub mod budget_stats;
pub mod orchestrator;
pub mod postal;
pub mod quartiles;
pub mod statuses;

pub use orchestrator::{MetricsOptions, MetricsOrchestrator};
