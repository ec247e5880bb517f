use crate::dns::executor::QueryExecutor;
use crate::dns::root_iteration::{RootIterationStrategy, UpstreamResult};
use async_trait::async_trait;
use rootwalk_application::ports::NameResolver;
use rootwalk_domain::{DnsQuery, LookupStatus, RecordEntry, RecordKind, ResolutionResult};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info};

/// Walks the root servers for one name: a CNAME probe first, then A, AAAA
/// and MX against every alias target (or the name itself when there is none).
///
/// Never fails. Branches that produce nothing leave their list empty and are
/// reflected in the per-kind [`LookupStatus`].
pub struct CoreResolver {
    executor: Arc<QueryExecutor>,
    roots: Arc<[Ipv4Addr]>,
    strategy: Arc<dyn RootIterationStrategy>,
}

impl CoreResolver {
    pub fn new(
        executor: Arc<QueryExecutor>,
        roots: impl Into<Arc<[Ipv4Addr]>>,
        strategy: Arc<dyn RootIterationStrategy>,
    ) -> Self {
        let roots = roots.into();
        info!(
            roots = roots.len(),
            strategy = strategy.name(),
            timeout_ms = executor.timeout().as_millis() as u64,
            max_referral_depth = executor.max_referral_depth(),
            "Core resolver created"
        );

        Self {
            executor,
            roots,
            strategy,
        }
    }

    async fn query_across_roots(&self, query: &DnsQuery) -> Option<UpstreamResult> {
        self.strategy
            .query_across_roots(&self.executor, &self.roots, query)
            .await
    }

    /// Runs one question and keeps the answer entries of the asked kind.
    async fn collect(&self, query: &DnsQuery) -> (Vec<RecordEntry>, LookupStatus) {
        match self.query_across_roots(query).await {
            Some(upstream) => {
                let entries: Vec<RecordEntry> =
                    upstream.response.answers_of(query.kind).cloned().collect();
                let status = if entries.is_empty() {
                    LookupStatus::NoMatchingRecords
                } else {
                    LookupStatus::Answered
                };
                debug!(
                    query = %query,
                    root = %upstream.server,
                    latency_ms = upstream.latency_ms,
                    entries = entries.len(),
                    "Collected answer"
                );
                (entries, status)
            }
            None => (Vec::new(), LookupStatus::Unanswered),
        }
    }
}

#[async_trait]
impl NameResolver for CoreResolver {
    async fn resolve(&self, name: &str) -> Arc<ResolutionResult> {
        debug!(name = %name, "CoreResolver: walking from the roots");

        let mut result = ResolutionResult::new();

        let probe = DnsQuery::new(name, RecordKind::CNAME);
        let (aliases, status) = self.collect(&probe).await;
        let targets: Vec<Arc<str>> = aliases
            .iter()
            .filter_map(|entry| entry.cname_target().cloned())
            .collect();
        result.extend(aliases);
        result.record_status(RecordKind::CNAME, status);

        let targets = if targets.is_empty() {
            vec![Arc::from(name)]
        } else {
            debug!(name = %name, aliases = ?targets, "Following alias targets");
            targets
        };

        for kind in RecordKind::TARGETED {
            for target in &targets {
                let query = DnsQuery::new(Arc::clone(target), kind);
                let (entries, status) = self.collect(&query).await;
                result.extend(entries);
                result.record_status(kind, status);
            }
        }

        debug!(name = %name, records = result.len(), "Resolution assembled");
        Arc::new(result)
    }
}
