use super::RecordKind;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// One answer record, reduced to the fields this resolver reports.
///
/// `name` is always the owning name reported by the server in the answer
/// section, which is not necessarily the name that was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEntry {
    Cname {
        name: Arc<str>,
        target: Arc<str>,
    },
    A {
        name: Arc<str>,
        address: Ipv4Addr,
    },
    Aaaa {
        name: Arc<str>,
        address: Ipv6Addr,
    },
    Mx {
        name: Arc<str>,
        preference: u16,
        exchange: Arc<str>,
    },
}

impl RecordEntry {
    pub fn cname(name: impl Into<Arc<str>>, target: impl Into<Arc<str>>) -> Self {
        Self::Cname {
            name: name.into(),
            target: target.into(),
        }
    }

    pub fn a(name: impl Into<Arc<str>>, address: Ipv4Addr) -> Self {
        Self::A {
            name: name.into(),
            address,
        }
    }

    pub fn aaaa(name: impl Into<Arc<str>>, address: Ipv6Addr) -> Self {
        Self::Aaaa {
            name: name.into(),
            address,
        }
    }

    pub fn mx(name: impl Into<Arc<str>>, preference: u16, exchange: impl Into<Arc<str>>) -> Self {
        Self::Mx {
            name: name.into(),
            preference,
            exchange: exchange.into(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RecordEntry::Cname { .. } => RecordKind::CNAME,
            RecordEntry::A { .. } => RecordKind::A,
            RecordEntry::Aaaa { .. } => RecordKind::AAAA,
            RecordEntry::Mx { .. } => RecordKind::MX,
        }
    }

    pub fn name(&self) -> &Arc<str> {
        match self {
            RecordEntry::Cname { name, .. }
            | RecordEntry::A { name, .. }
            | RecordEntry::Aaaa { name, .. }
            | RecordEntry::Mx { name, .. } => name,
        }
    }

    /// Alias target of a CNAME entry.
    pub fn cname_target(&self) -> Option<&Arc<str>> {
        match self {
            RecordEntry::Cname { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// Renders a wire name the way records are reported: without the trailing
/// root dot, except for the root itself.
pub fn display_name(fqdn: &str) -> Arc<str> {
    match fqdn.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => Arc::from(stripped),
        _ => Arc::from(fqdn),
    }
}
