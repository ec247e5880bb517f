#![allow(dead_code)]
use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError, RecordKind};
use rootwalk_infrastructure::dns::{DnsExchange, DnsResponse};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type ScriptKey = (Ipv4Addr, String, RecordKind);

/// Exchange that answers from a script keyed by (server, name, kind).
///
/// Anything unscripted behaves like a server that never replies.
#[derive(Default)]
pub struct ScriptedExchange {
    script: Mutex<HashMap<ScriptKey, Result<DnsResponse, DomainError>>>,
    calls: Mutex<Vec<(Ipv4Addr, DnsQuery)>>,
    completed: AtomicUsize,
    delay: Option<Duration>,
    server_delays: HashMap<Ipv4Addr, Duration>,
}

impl ScriptedExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay for one server, taking precedence over `with_delay`.
    pub fn with_server_delay(mut self, server: Ipv4Addr, delay: Duration) -> Self {
        self.server_delays.insert(server, delay);
        self
    }

    pub fn on(self, server: Ipv4Addr, name: &str, kind: RecordKind, response: DnsResponse) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert((server, name.to_string(), kind), Ok(response));
        self
    }

    pub fn fail(self, server: Ipv4Addr, name: &str, kind: RecordKind, error: DomainError) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert((server, name.to_string(), kind), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(Ipv4Addr, DnsQuery)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Exchanges that ran to the end instead of being dropped mid-delay.
    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn servers_asked(&self) -> Vec<Ipv4Addr> {
        self.calls().into_iter().map(|(server, _)| server).collect()
    }

    pub fn count_for(&self, name: &str, kind: RecordKind) -> usize {
        self.calls()
            .iter()
            .filter(|(_, q)| q.domain.as_ref() == name && q.kind == kind)
            .count()
    }
}

#[async_trait]
impl DnsExchange for ScriptedExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let ip = match server.ip() {
            std::net::IpAddr::V4(ip) => ip,
            std::net::IpAddr::V6(_) => panic!("IPv6 server address in test"),
        };
        self.calls.lock().unwrap().push((ip, query.clone()));

        if let Some(delay) = self.server_delays.get(&ip).copied().or(self.delay) {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        let key = (ip, query.domain.to_string(), query.kind);
        let scripted = self.script.lock().unwrap().get(&key).cloned();
        scripted.unwrap_or_else(|| {
            Err(DomainError::Network {
                server: server.to_string(),
                reason: "Timeout waiting for UDP response".to_string(),
            })
        })
    }
}
