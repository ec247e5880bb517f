use rootwalk_domain::{RecordEntry, RecordKind, ResolutionResult};
use serde::Serialize;

/// CNAME line: `alias` is the owning name, `name` the canonical target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnameView {
    pub name: String,
    pub alias: String,
}

/// A or AAAA line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressView {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxView {
    pub name: String,
    pub preference: u16,
    pub exchange: String,
}

/// Presentation-ready records, one list per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedRecords {
    #[serde(rename = "CNAME")]
    pub cname: Vec<CnameView>,
    #[serde(rename = "A")]
    pub a: Vec<AddressView>,
    #[serde(rename = "AAAA")]
    pub aaaa: Vec<AddressView>,
    #[serde(rename = "MX")]
    pub mx: Vec<MxView>,
}

impl AggregatedRecords {
    pub fn is_empty(&self) -> bool {
        self.cname.is_empty() && self.a.is_empty() && self.aaaa.is_empty() && self.mx.is_empty()
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::CNAME => self.cname.len(),
            RecordKind::A => self.a.len(),
            RecordKind::AAAA => self.aaaa.len(),
            RecordKind::MX => self.mx.len(),
        }
    }
}

/// Shapes a [`ResolutionResult`] into [`AggregatedRecords`]. Pure transform.
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn aggregate(result: &ResolutionResult) -> AggregatedRecords {
        let mut out = AggregatedRecords::default();

        for (_, entries) in result.iter() {
            for entry in entries {
                match entry {
                    RecordEntry::Cname { name, target } => out.cname.push(CnameView {
                        name: target.to_string(),
                        alias: name.to_string(),
                    }),
                    RecordEntry::A { name, address } => out.a.push(AddressView {
                        name: name.to_string(),
                        address: address.to_string(),
                    }),
                    RecordEntry::Aaaa { name, address } => out.aaaa.push(AddressView {
                        name: name.to_string(),
                        address: address.to_string(),
                    }),
                    RecordEntry::Mx {
                        name,
                        preference,
                        exchange,
                    } => out.mx.push(MxView {
                        name: name.to_string(),
                        preference: *preference,
                        exchange: exchange.to_string(),
                    }),
                }
            }
        }

        out
    }
}
