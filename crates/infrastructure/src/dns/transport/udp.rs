//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). A response with the TC bit set is
//! handed back unchanged; there is no TCP retry. A datagram from any address
//! other than the queried server is a protocol failure.

use rootwalk_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size accepted
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn network_error(&self, reason: String) -> DomainError {
        DomainError::Network {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    /// Sends one query and returns the raw reply datagram.
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.network_error(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.network_error("Timeout sending UDP query".into()))?
                .map_err(|e| self.network_error(format!("Failed to send UDP query: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.network_error("Timeout waiting for UDP response".into()))?
                .map_err(|e| {
                    self.network_error(format!("Failed to receive UDP response: {}", e))
                })?;

        if from_addr != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
            return Err(DomainError::Protocol {
                server: self.server_addr.to_string(),
                reason: format!("Response came from unexpected source {}", from_addr),
            });
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "198.41.0.4:53".parse().unwrap();
        let transport = UdpTransport::new(addr);
        assert_eq!(transport.server_addr(), addr);
    }

    #[tokio::test]
    async fn test_silent_server_times_out_as_network_error() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = silent.local_addr().unwrap();

        let transport = UdpTransport::new(addr);
        let result = transport
            .send(&[0u8; 12], Duration::from_millis(50))
            .await;

        match result {
            Err(DomainError::Network { server, reason }) => {
                assert_eq!(server, addr.to_string());
                assert!(reason.contains("Timeout"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
