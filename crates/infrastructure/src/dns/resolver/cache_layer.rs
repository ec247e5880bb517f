use async_trait::async_trait;
use dashmap::DashMap;
use rootwalk_application::ports::{NameResolver, ResolutionCache};
use rootwalk_domain::ResolutionResult;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

type InflightSender = Arc<watch::Sender<Option<Arc<ResolutionResult>>>>;
type InflightMap = DashMap<Arc<str>, InflightSender, FxBuildHasher>;

struct InflightLeaderGuard {
    inflight: Arc<InflightMap>,
    key: Arc<str>,
}

impl Drop for InflightLeaderGuard {
    fn drop(&mut self) {
        if let Some((_, tx)) = self.inflight.remove(&self.key) {
            let _ = tx.send(None);
        }
    }
}

/// Memoizing front for a resolver, with one resolution in flight per name.
pub struct CachedResolver {
    inner: Arc<dyn NameResolver>,
    cache: Arc<dyn ResolutionCache>,
    inflight: Arc<InflightMap>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn NameResolver>, cache: Arc<dyn ResolutionCache>) -> Self {
        Self {
            inner,
            cache,
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    fn register_or_join_inflight(
        &self,
        name: &str,
    ) -> (bool, watch::Receiver<Option<Arc<ResolutionResult>>>) {
        match self.inflight.entry(Arc::from(name)) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                (false, rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, rx) = watch::channel(None::<Arc<ResolutionResult>>);
                e.insert(Arc::new(tx));
                (true, rx)
            }
        }
    }

    async fn resolve_as_follower(
        &self,
        name: &str,
        mut rx: watch::Receiver<Option<Arc<ResolutionResult>>>,
    ) -> Arc<ResolutionResult> {
        if let Ok(()) = rx.changed().await {
            if let Some(result) = rx.borrow().clone() {
                debug!(name = %name, "Joined in-flight resolution");
                return result;
            }
        }
        if let Some(result) = rx.borrow().clone() {
            return result;
        }

        if let Some(cached) = self.cache.peek(name) {
            return cached;
        }

        debug!(name = %name, "Leader went away, retrying");
        self.resolve(name).await
    }

    async fn resolve_as_leader(&self, name: &str) -> Arc<ResolutionResult> {
        debug!(name = %name, "Cache MISS");

        let key: Arc<str> = Arc::from(name);
        let guard = InflightLeaderGuard {
            inflight: Arc::clone(&self.inflight),
            key: Arc::clone(&key),
        };

        // Another leader may have finished between our cache miss and
        // registration.
        let stored = match self.cache.peek(name) {
            Some(cached) => cached,
            None => {
                let result = self.inner.resolve(name).await;
                self.cache.insert(name, result)
            }
        };

        if let Some((_, tx)) = self.inflight.remove(&key) {
            let _ = tx.send(Some(Arc::clone(&stored)));
        }

        drop(guard);
        stored
    }
}

#[async_trait]
impl NameResolver for CachedResolver {
    fn try_cache(&self, name: &str) -> Option<Arc<ResolutionResult>> {
        self.cache.peek(name)
    }

    async fn resolve(&self, name: &str) -> Arc<ResolutionResult> {
        if let Some(cached) = self.cache.get(name) {
            debug!(name = %name, "Cache HIT");
            return cached;
        }

        let (is_leader, rx) = self.register_or_join_inflight(name);

        if !is_leader {
            return self.resolve_as_follower(name, rx).await;
        }

        self.resolve_as_leader(name).await
    }
}
