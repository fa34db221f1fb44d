//! Category slice cache.
//!
//! Records are immutable once ingested, so a slice stays valid until the
//! next ingestion, which must call [`SliceCache::invalidate_all`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use budgetlens_core::config::CacheConfig;
use budgetlens_core::models::{normalize_category, ProjectRecord};
use moka::sync::Cache;

/// Per-category slices plus the corpus category counts, with hit/miss tracking.
pub struct SliceCache {
    slices: Cache<String, Arc<[ProjectRecord]>>,
    counts: Cache<(), Arc<[(String, u64)]>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SliceCache {
    pub fn new(max_slices: u64, ttl: Duration) -> Self {
        Self {
            slices: Cache::builder()
                .max_capacity(max_slices)
                .time_to_live(ttl)
                .build(),
            counts: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.effective_max_slices(), config.effective_ttl())
    }

    /// Cached slice for `category`, or load and cache it.
    pub fn slice_or_load<E>(
        &self,
        category: &str,
        load: impl FnOnce() -> Result<Vec<ProjectRecord>, E>,
    ) -> Result<Arc<[ProjectRecord]>, E> {
        let key = normalize_category(category);
        if let Some(slice) = self.slices.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(slice);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let slice: Arc<[ProjectRecord]> = load()?.into();
        self.slices.insert(key, Arc::clone(&slice));
        Ok(slice)
    }

    /// Cached corpus category counts, or load and cache them.
    pub fn counts_or_load<E>(
        &self,
        load: impl FnOnce() -> Result<Vec<(String, u64)>, E>,
    ) -> Result<Arc<[(String, u64)]>, E> {
        if let Some(counts) = self.counts.get(&()) {
            return Ok(counts);
        }
        let counts: Arc<[(String, u64)]> = load()?.into();
        self.counts.insert((), Arc::clone(&counts));
        Ok(counts)
    }

    /// Drop everything (after ingestion).
    pub fn invalidate_all(&self) {
        self.slices.invalidate_all();
        self.counts.invalidate_all();
    }

    /// Total slice hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total slice misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Slice hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let total = h + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.slices.run_pending_tasks();
        self.slices.entry_count()
    }
}

impl Default for SliceCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
