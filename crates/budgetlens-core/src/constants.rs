// Single source of truth for compiled defaults and fixed contract values.

// --- Request validation ---
pub const DEFAULT_MAX_TITLE_WORDS: usize = 15;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

// --- Metrics ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_ABANDONED_EXAMPLES: usize = 5;
pub const DEFAULT_INCLUDE_CATEGORY_BREAKDOWN: bool = true;
pub const QUARTILE_COUNT: usize = 4;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "budgetlens.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Classifier ---
pub const DEFAULT_CLASSIFIER_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;
pub const CLASSIFY_PATH: &str = "/classify";

// --- Slice cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_MAX_SLICES: u64 = 256;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

// --- Tracing ---
pub const LOG_ENV_VAR: &str = "BUDGETLENS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "budgetlens=info";

/// Fixed label and description per quartile index (1-based).
pub const QUARTILE_TEXT: [(&str, &str); QUARTILE_COUNT] = [
    ("Projets économiques", "Budget le plus bas (0-25%)"),
    ("Projets modérés", "Budget inférieur à la médiane (25-50%)"),
    ("Projets conséquents", "Budget supérieur à la médiane (50-75%)"),
    ("Projets ambitieux", "Budget le plus élevé (75-100%)"),
];
