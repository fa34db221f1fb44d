//! Top-level budgetlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, CatalogConfig, ClassifierBackend, ClassifierConfig, MetricsConfig,
    PredictionConfig, StorageConfig,
};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "budgetlens.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`BUDGETLENS_*`)
/// 3. Project config (`budgetlens.toml` in project root)
/// 4. User config (`~/.budgetlens/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BudgetLensConfig {
    pub storage: StorageConfig,
    pub prediction: PredictionConfig,
    pub classifier: ClassifierConfig,
    pub cache: CacheConfig,
    pub metrics: MetricsConfig,
    pub catalog: CatalogConfig,
}

/// Overrides applied on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub dataset_path: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub classifier_backend: Option<ClassifierBackend>,
    pub classifier_endpoint: Option<String>,
}

impl BudgetLensConfig {
    /// Load configuration from every layer rooted at `root`, then validate.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(
            backend = ?config.classifier.effective_backend(),
            db_path = config.storage.effective_db_path(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BudgetLensConfig) -> Result<(), ConfigError> {
        if config.prediction.max_title_words == Some(0) {
            return Err(invalid("prediction.max_title_words", "must be at least 1"));
        }
        if config.prediction.request_timeout_ms == Some(0) {
            return Err(invalid("prediction.request_timeout_ms", "must be greater than 0"));
        }
        if config.prediction.top_n == Some(0) {
            return Err(invalid("prediction.top_n", "must be at least 1"));
        }
        if config.classifier.timeout_ms == Some(0) {
            return Err(invalid("classifier.timeout_ms", "must be greater than 0"));
        }
        if let Some(min) = config.classifier.min_confidence {
            if !(0.0..=1.0).contains(&min) {
                return Err(invalid(
                    "classifier.min_confidence",
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        if config.classifier.effective_backend() == ClassifierBackend::Http {
            let missing = config
                .classifier
                .endpoint
                .as_deref()
                .map_or(true, |e| e.trim().is_empty());
            if missing {
                return Err(invalid(
                    "classifier.endpoint",
                    "required when backend is \"http\"",
                ));
            }
        }
        if config.storage.read_pool_size == Some(0) {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.budgetlens/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".budgetlens").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut BudgetLensConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: BudgetLensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    pub fn merge(base: &mut BudgetLensConfig, other: &BudgetLensConfig) {
        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.dataset_path.is_some() {
            base.storage.dataset_path = other.storage.dataset_path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }

        // Prediction
        if other.prediction.max_title_words.is_some() {
            base.prediction.max_title_words = other.prediction.max_title_words;
        }
        if other.prediction.request_timeout_ms.is_some() {
            base.prediction.request_timeout_ms = other.prediction.request_timeout_ms;
        }
        if other.prediction.top_n.is_some() {
            base.prediction.top_n = other.prediction.top_n;
        }
        if other.prediction.abandoned_examples.is_some() {
            base.prediction.abandoned_examples = other.prediction.abandoned_examples;
        }

        // Classifier
        if other.classifier.backend.is_some() {
            base.classifier.backend = other.classifier.backend;
        }
        if other.classifier.endpoint.is_some() {
            base.classifier.endpoint = other.classifier.endpoint.clone();
        }
        if other.classifier.timeout_ms.is_some() {
            base.classifier.timeout_ms = other.classifier.timeout_ms;
        }
        if other.classifier.min_confidence.is_some() {
            base.classifier.min_confidence = other.classifier.min_confidence;
        }

        // Cache
        if other.cache.enabled.is_some() {
            base.cache.enabled = other.cache.enabled;
        }
        if other.cache.max_slices.is_some() {
            base.cache.max_slices = other.cache.max_slices;
        }
        if other.cache.ttl_secs.is_some() {
            base.cache.ttl_secs = other.cache.ttl_secs;
        }

        // Metrics
        if other.metrics.include_category_breakdown.is_some() {
            base.metrics.include_category_breakdown = other.metrics.include_category_breakdown;
        }

        // Catalog
        if !other.catalog.categories.is_empty() {
            base.catalog.categories = other.catalog.categories.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut BudgetLensConfig) {
        if let Ok(val) = std::env::var("BUDGETLENS_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Ok(val) = std::env::var("BUDGETLENS_DATASET_PATH") {
            config.storage.dataset_path = Some(val);
        }
        if let Ok(val) = std::env::var("BUDGETLENS_REQUEST_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.prediction.request_timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BUDGETLENS_MAX_TITLE_WORDS") {
            if let Ok(v) = val.parse::<usize>() {
                config.prediction.max_title_words = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BUDGETLENS_CLASSIFIER_BACKEND") {
            if let Ok(v) = val.parse::<ClassifierBackend>() {
                config.classifier.backend = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BUDGETLENS_CLASSIFIER_ENDPOINT") {
            config.classifier.endpoint = Some(val);
        }
        if let Ok(val) = std::env::var("BUDGETLENS_CLASSIFIER_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.classifier.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BUDGETLENS_CACHE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.cache.enabled = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut BudgetLensConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.dataset_path {
            config.storage.dataset_path = Some(v.clone());
        }
        if let Some(v) = overrides.request_timeout_ms {
            config.prediction.request_timeout_ms = Some(v);
        }
        if let Some(v) = overrides.classifier_backend {
            config.classifier.backend = Some(v);
        }
        if let Some(ref v) = overrides.classifier_endpoint {
            config.classifier.endpoint = Some(v.clone());
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
