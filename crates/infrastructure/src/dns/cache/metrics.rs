use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

// align(64) keeps the hot counters on their own cache line.
#[derive(Default)]
#[repr(align(64))]
pub struct CacheMetrics {
    // Hot counters: touched on every lookup.
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    _hot_pad: [u64; 6],

    // Cold counters.
    pub insertions: AtomicU64,
}

impl CacheMetrics {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(AtomicOrdering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(AtomicOrdering::Relaxed)
    }

    pub fn insertions(&self) -> u64 {
        self.insertions.load(AtomicOrdering::Relaxed)
    }
}
