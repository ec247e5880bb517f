#![allow(dead_code)]
use async_trait::async_trait;
use rootwalk_application::ports::NameResolver;
use rootwalk_domain::{LookupStatus, RecordEntry, RecordKind, ResolutionResult};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Returns canned results per name; unknown names resolve to an empty result.
/// Results handed out once are remembered so repeated names behave like a
/// cache hit.
pub struct MockNameResolver {
    responses: RwLock<HashMap<String, Arc<ResolutionResult>>>,
    served: RwLock<HashMap<String, Arc<ResolutionResult>>>,
    resolve_calls: AtomicUsize,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            served: RwLock::new(HashMap::new()),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, name: &str, result: ResolutionResult) {
        self.responses
            .write()
            .unwrap()
            .insert(name.to_string(), Arc::new(result));
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve(&self, name: &str) -> Arc<ResolutionResult> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(served) = self.served.read().unwrap().get(name) {
            return Arc::clone(served);
        }

        let result = self
            .responses
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| Arc::new(ResolutionResult::new()));

        self.served
            .write()
            .unwrap()
            .insert(name.to_string(), Arc::clone(&result));
        result
    }

    fn try_cache(&self, name: &str) -> Option<Arc<ResolutionResult>> {
        self.served.read().unwrap().get(name).cloned()
    }
}

pub struct ResolutionBuilder {
    result: ResolutionResult,
}

impl ResolutionBuilder {
    pub fn new() -> Self {
        Self {
            result: ResolutionResult::new(),
        }
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.result.push(RecordEntry::cname(name, target));
        self.result
            .record_status(RecordKind::CNAME, LookupStatus::Answered);
        self
    }

    pub fn a(mut self, name: &str, address: &str) -> Self {
        let address: Ipv4Addr = address.parse().unwrap();
        self.result.push(RecordEntry::a(name, address));
        self.result.record_status(RecordKind::A, LookupStatus::Answered);
        self
    }

    pub fn aaaa(mut self, name: &str, address: &str) -> Self {
        let address: Ipv6Addr = address.parse().unwrap();
        self.result.push(RecordEntry::aaaa(name, address));
        self.result
            .record_status(RecordKind::AAAA, LookupStatus::Answered);
        self
    }

    pub fn mx(mut self, name: &str, preference: u16, exchange: &str) -> Self {
        self.result.push(RecordEntry::mx(name, preference, exchange));
        self.result.record_status(RecordKind::MX, LookupStatus::Answered);
        self
    }

    pub fn status(mut self, kind: RecordKind, status: LookupStatus) -> Self {
        self.result.record_status(kind, status);
        self
    }

    pub fn build(self) -> ResolutionResult {
        self.result
    }
}
