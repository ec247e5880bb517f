use crate::dns::forwarding::{DnsExchange, DnsResponse};
use rootwalk_domain::{DnsQuery, DomainError, ResolverConfig};
use rustc_hash::FxHashSet;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Sends one question to a server and follows glue referrals until some
/// server answers.
///
/// The walk is bounded: every address is tried at most once per call, and at
/// most `max_referral_depth` referrals are followed.
pub struct QueryExecutor {
    exchange: Arc<dyn DnsExchange>,
    port: u16,
    timeout: Duration,
    max_referral_depth: usize,
}

impl QueryExecutor {
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        port: u16,
        timeout: Duration,
        max_referral_depth: usize,
    ) -> Self {
        Self {
            exchange,
            port,
            timeout,
            max_referral_depth,
        }
    }

    pub fn from_config(exchange: Arc<dyn DnsExchange>, config: &ResolverConfig) -> Self {
        Self::new(
            exchange,
            config.port,
            config.query_timeout_duration(),
            config.max_referral_depth,
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_referral_depth(&self) -> usize {
        self.max_referral_depth
    }

    pub async fn execute(
        &self,
        query: &DnsQuery,
        server: Ipv4Addr,
    ) -> Result<DnsResponse, DomainError> {
        let mut visited = FxHashSet::default();
        visited.insert(server);

        let mut target = server;
        let mut depth = 0usize;

        loop {
            let addr = SocketAddr::from((target, self.port));
            let response = self.exchange.exchange(query, addr, self.timeout).await?;

            if response.has_answer() {
                debug!(server = %addr, query = %query, depth = depth, "Answer received");
                return Ok(response);
            }

            let Some(next) = response.first_glue() else {
                return Err(DomainError::NoUsableResponse {
                    server: addr.to_string(),
                });
            };

            if !visited.insert(next) {
                return Err(DomainError::ReferralLoop {
                    server: next.to_string(),
                });
            }

            if depth >= self.max_referral_depth {
                return Err(DomainError::ReferralDepthExceeded { depth });
            }

            depth += 1;
            debug!(from = %addr, to = %next, query = %query, depth = depth, "Following referral");
            target = next;
        }
    }
}
