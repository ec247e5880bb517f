use super::strategy::{RootIterationStrategy, UpstreamResult};
use crate::dns::executor::QueryExecutor;
use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, FailureClass};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Tries the roots in declared order and stops at the first answer.
pub struct SequentialStrategy;

impl SequentialStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RootIterationStrategy for SequentialStrategy {
    async fn query_across_roots(
        &self,
        executor: &Arc<QueryExecutor>,
        roots: &[Ipv4Addr],
        query: &DnsQuery,
    ) -> Option<UpstreamResult> {
        debug!(strategy = "sequential", servers = roots.len(), query = %query, "Trying roots in order");

        for (index, root) in roots.iter().enumerate() {
            let start = Instant::now();
            match executor.execute(query, *root).await {
                Ok(response) => {
                    let latency_ms = start.elapsed().as_millis() as u64;
                    debug!(server = %root, latency_ms = latency_ms, position = index, "Root chain answered");
                    return Some(UpstreamResult {
                        response,
                        server: *root,
                        latency_ms,
                    });
                }
                Err(e) => match e.failure_class() {
                    FailureClass::EmptyResult => {
                        debug!(server = %root, query = %query, error = %e, position = index, "No usable answer, moving on");
                    }
                    class => {
                        warn!(server = %root, query = %query, class = class.as_str(), error = %e, position = index, "Root chain failed, moving on");
                    }
                },
            }
        }

        debug!(query = %query, "No root produced an answer");
        None
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
