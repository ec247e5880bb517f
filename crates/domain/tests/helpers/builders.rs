#![allow(dead_code)]
use rootwalk_domain::{LookupStatus, RecordEntry, RecordKind, ResolutionResult};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub struct ResolutionResultBuilder {
    result: ResolutionResult,
}

impl ResolutionResultBuilder {
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
        self.result
            .push(RecordEntry::a(name, Ipv4Addr::from_str(address).unwrap()));
        self.result.record_status(RecordKind::A, LookupStatus::Answered);
        self
    }

    pub fn aaaa(mut self, name: &str, address: &str) -> Self {
        self.result
            .push(RecordEntry::aaaa(name, Ipv6Addr::from_str(address).unwrap()));
        self.result
            .record_status(RecordKind::AAAA, LookupStatus::Answered);
        self
    }

    pub fn mx(mut self, name: &str, preference: u16, exchange: &str) -> Self {
        self.result.push(RecordEntry::mx(name, preference, exchange));
        self.result.record_status(RecordKind::MX, LookupStatus::Answered);
        self
    }

    pub fn build(self) -> ResolutionResult {
        self.result
    }
}
