#![allow(dead_code)]
use rootwalk_domain::{RecordEntry, ResolverConfig};
use rootwalk_infrastructure::dns::DnsResponse;
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn ip(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, last)
}

pub fn test_config(roots: Vec<Ipv4Addr>) -> ResolverConfig {
    ResolverConfig {
        root_servers: roots,
        ..ResolverConfig::default()
    }
}

pub struct ResponseBuilder {
    answers: Vec<RecordEntry>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            answers: Vec::new(),
        }
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.answers.push(RecordEntry::cname(name, target));
        self
    }

    pub fn a(mut self, name: &str, addr: &str) -> Self {
        self.answers
            .push(RecordEntry::a(name, addr.parse::<Ipv4Addr>().unwrap()));
        self
    }

    pub fn aaaa(mut self, name: &str, addr: &str) -> Self {
        self.answers
            .push(RecordEntry::aaaa(name, addr.parse::<Ipv6Addr>().unwrap()));
        self
    }

    pub fn mx(mut self, name: &str, preference: u16, exchange: &str) -> Self {
        self.answers.push(RecordEntry::mx(name, preference, exchange));
        self
    }

    pub fn build(self) -> DnsResponse {
        DnsResponse::answer(fastrand::u16(..), self.answers)
    }
}

pub fn referral_to(glue: Ipv4Addr) -> DnsResponse {
    DnsResponse::referral(fastrand::u16(..), vec![glue])
}

pub fn empty_response() -> DnsResponse {
    DnsResponse::empty(fastrand::u16(..))
}
