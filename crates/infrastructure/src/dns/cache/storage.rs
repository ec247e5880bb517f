use super::CacheMetrics;
use dashmap::DashMap;
use rootwalk_application::ports::{CacheMetricsSnapshot, ResolutionCache};
use rootwalk_domain::ResolutionResult;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::{debug, info};

/// Unbounded memo of assembled results, keyed by the name exactly as the
/// caller spelled it.
pub struct InMemoryResolutionCache {
    entries: DashMap<Arc<str>, Arc<ResolutionResult>, FxBuildHasher>,
    metrics: CacheMetrics,
}

impl InMemoryResolutionCache {
    pub fn new() -> Self {
        info!("Result cache initialized (no eviction, no expiry)");
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

impl Default for InMemoryResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCache for InMemoryResolutionCache {
    fn get(&self, name: &str) -> Option<Arc<ResolutionResult>> {
        match self.entries.get(name) {
            Some(entry) => {
                self.metrics.record_hit();
                debug!(name = %name, "Cache HIT");
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    fn peek(&self, name: &str) -> Option<Arc<ResolutionResult>> {
        self.entries.get(name).map(|entry| Arc::clone(entry.value()))
    }

    fn insert(&self, name: &str, result: Arc<ResolutionResult>) -> Arc<ResolutionResult> {
        match self.entries.entry(Arc::from(name)) {
            dashmap::Entry::Occupied(existing) => {
                debug!(name = %name, "Cache already populated, keeping first result");
                Arc::clone(existing.get())
            }
            dashmap::Entry::Vacant(slot) => {
                self.metrics.record_insertion();
                Arc::clone(slot.insert(result).value())
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries: self.entries.len(),
            hits: self.metrics.hits(),
            misses: self.metrics.misses(),
            insertions: self.metrics.insertions(),
        }
    }
}
