use super::RecordKind;
use std::fmt;
use std::sync::Arc;

/// A single (name, kind) question as sent to a name server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub kind: RecordKind,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, kind: RecordKind) -> Self {
        Self {
            domain: domain.into(),
            kind,
        }
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.kind)
    }
}
