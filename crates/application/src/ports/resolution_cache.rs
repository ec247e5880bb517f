use rootwalk_domain::ResolutionResult;
use std::sync::Arc;

/// Snapshot of result cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

impl CacheMetricsSnapshot {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoizes assembled results keyed by the caller-supplied name text.
///
/// Entries are never updated, evicted or expired.
pub trait ResolutionCache: Send + Sync {
    /// Counted lookup: records a hit or a miss.
    fn get(&self, name: &str) -> Option<Arc<ResolutionResult>>;

    /// Lookup that leaves the hit and miss counters untouched.
    fn peek(&self, name: &str) -> Option<Arc<ResolutionResult>>;

    /// Stores `result` unless the name is already present, and returns the
    /// value that is stored afterwards.
    fn insert(&self, name: &str, result: Arc<ResolutionResult>) -> Arc<ResolutionResult>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
