use async_trait::async_trait;
use rootwalk_domain::ResolutionResult;
use std::sync::Arc;

/// Resolves a requested name into its CNAME, A, AAAA and MX records.
///
/// Resolution never fails: a name that cannot be resolved yields a result
/// with all four lists empty. Why a list is empty is recorded per kind in
/// [`ResolutionResult::status`].
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Arc<ResolutionResult>;

    /// Check only the result cache without touching the network.
    /// Default implementation returns None (no cache).
    fn try_cache(&self, _name: &str) -> Option<Arc<ResolutionResult>> {
        None
    }
}
