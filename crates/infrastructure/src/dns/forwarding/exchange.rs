use super::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// One request/response round trip with a single name server.
///
/// This is the seam the executor talks through; tests substitute scripted
/// exchanges for it.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError>;
}

/// Build → send over UDP → parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpExchange;

impl UdpExchange {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let (id, query_bytes) = MessageBuilder::for_query(query)?;

        let transport = UdpTransport::new(server);
        let reply = transport.send(&query_bytes, timeout).await?;

        let response = ResponseParser::parse(&reply, server)?;

        if response.id != id {
            return Err(DomainError::Protocol {
                server: server.to_string(),
                reason: format!(
                    "Response ID {} does not match query ID {}",
                    response.id, id
                ),
            });
        }

        if response.truncated {
            debug!(server = %server, query = %query, "Truncated response used as-is");
        }

        Ok(response)
    }
}
