#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock server treats every query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Answer with A 93.184.216.34 for the asked name.
    AnswerA,
    /// Answer correctly but with a different transaction ID.
    WrongId,
    /// Reply with bytes that are not a DNS message.
    Garbage,
    /// Answer like `AnswerA`, but from a second socket on another port.
    AnswerFromOtherPort,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = Self::build_mock_response(&buf[..len], behavior);
                            if let MockBehavior::AnswerFromOtherPort = behavior {
                                if let Ok(other) = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await {
                                    let _ = other.send_to(&response, peer).await;
                                }
                            } else {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn build_mock_response(query: &[u8], behavior: MockBehavior) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        if let MockBehavior::Garbage = behavior {
            return vec![0xde, 0xad, 0xbe, 0xef];
        }

        let mut response = Vec::with_capacity(512);

        match behavior {
            MockBehavior::WrongId => {
                let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
                response.extend_from_slice(&id.to_be_bytes());
            }
            _ => response.extend_from_slice(&query[0..2]),
        }

        // QR=1, RD=1, RA=1, NOERROR
        response.push(0x81);
        response.push(0x80);

        // QDCOUNT echoed, ANCOUNT=1, NSCOUNT=0, ARCOUNT=0
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        // Answer: name pointer to the question, type A, class IN, TTL 60
        response.extend_from_slice(&[
            0xc0, 0x0c,
            0x00, 0x01,
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x3c,
            0x00, 0x04,
            93, 184, 216, 34,
        ]);

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
