//! Configuration system for budgetlens.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod budgetlens_config;
pub mod cache_config;
pub mod catalog_config;
pub mod classifier_config;
pub mod metrics_config;
pub mod prediction_config;
pub mod storage_config;

pub use budgetlens_config::{BudgetLensConfig, ConfigOverrides};
pub use cache_config::CacheConfig;
pub use catalog_config::CatalogConfig;
pub use classifier_config::{ClassifierBackend, ClassifierConfig};
pub use metrics_config::MetricsConfig;
pub use prediction_config::PredictionConfig;
pub use storage_config::StorageConfig;
