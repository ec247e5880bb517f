use std::fmt;
use std::str::FromStr;

/// The record kinds this resolver looks up. Declaration order is the
/// presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    CNAME,
    A,
    AAAA,
    MX,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::CNAME,
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::MX,
    ];

    /// Kinds looked up after the CNAME probe, in lookup order.
    pub const TARGETED: [RecordKind; 3] = [RecordKind::A, RecordKind::AAAA, RecordKind::MX];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::CNAME => "CNAME",
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::MX => "MX",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            RecordKind::CNAME => 0,
            RecordKind::A => 1,
            RecordKind::AAAA => 2,
            RecordKind::MX => 3,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CNAME" => Ok(RecordKind::CNAME),
            "A" => Ok(RecordKind::A),
            "AAAA" => Ok(RecordKind::AAAA),
            "MX" => Ok(RecordKind::MX),
            _ => Err(format!("Unknown record kind: {}", s)),
        }
    }
}
