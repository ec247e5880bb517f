use super::strategy::{RootIterationStrategy, UpstreamResult};
use crate::dns::executor::QueryExecutor;
use async_trait::async_trait;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use rootwalk_domain::DnsQuery;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Races every root; the first chain to answer wins and the rest are aborted.
pub struct ParallelStrategy;

impl ParallelStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParallelStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RootIterationStrategy for ParallelStrategy {
    async fn query_across_roots(
        &self,
        executor: &Arc<QueryExecutor>,
        roots: &[Ipv4Addr],
        query: &DnsQuery,
    ) -> Option<UpstreamResult> {
        if roots.is_empty() {
            return None;
        }

        debug!(strategy = "parallel", servers = roots.len(), query = %query, "Racing all roots");

        let start = Instant::now();
        let mut abort_handles = Vec::with_capacity(roots.len());
        let mut futs = FuturesUnordered::new();

        for root in roots {
            let root = *root;
            let executor = Arc::clone(executor);
            let query = query.clone();
            let handle = tokio::spawn(async move {
                executor.execute(&query, root).await.map(|response| (root, response))
            });
            abort_handles.push(handle.abort_handle());
            futs.push(handle);
        }

        let hops = u32::try_from(executor.max_referral_depth())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        let budget = executor.timeout().saturating_mul(hops);

        let result = timeout(budget, async {
            while let Some(join_result) = futs.next().await {
                match join_result {
                    Ok(Ok((root, response))) => {
                        let latency_ms = start.elapsed().as_millis() as u64;
                        debug!(server = %root, latency_ms = latency_ms, "Fastest root chain");
                        return Some(UpstreamResult {
                            response,
                            server: root,
                            latency_ms,
                        });
                    }
                    Ok(Err(e)) => {
                        debug!(class = e.failure_class().as_str(), error = %e, "Root chain failed");
                    }
                    Err(e) => {
                        warn!(error = %e, "Task panicked");
                    }
                }
            }
            None
        })
        .await;

        for handle in &abort_handles {
            handle.abort();
        }

        match result {
            Ok(found) => found,
            Err(_) => {
                warn!(query = %query, budget_ms = budget.as_millis() as u64, "Parallel root race timed out");
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}
