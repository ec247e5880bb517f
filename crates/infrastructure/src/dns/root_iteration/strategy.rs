use crate::dns::executor::QueryExecutor;
use crate::dns::forwarding::DnsResponse;
use async_trait::async_trait;
use rootwalk_domain::DnsQuery;
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UpstreamResult {
    pub response: DnsResponse,
    /// Root server that started the successful chain.
    pub server: Ipv4Addr,
    pub latency_ms: u64,
}

/// Decides how the root servers are consulted for one question.
///
/// Returns `None` when no root led to an answer. Failures never escape.
#[async_trait]
pub trait RootIterationStrategy: Send + Sync {
    async fn query_across_roots(
        &self,
        executor: &Arc<QueryExecutor>,
        roots: &[Ipv4Addr],
        query: &DnsQuery,
    ) -> Option<UpstreamResult>;

    fn name(&self) -> &'static str;
}
