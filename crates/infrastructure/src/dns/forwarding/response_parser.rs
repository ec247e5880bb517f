use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use rootwalk_domain::{display_name, DomainError, RecordEntry, RecordKind};
use std::net::{Ipv4Addr, SocketAddr};
use tracing::debug;

/// The parts of a server reply the resolver acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,

    /// Answer records of a reported kind, in wire order.
    pub answers: Vec<RecordEntry>,

    /// Size of the raw answer section, including kinds that are not reported.
    pub answer_count: usize,

    /// IPv4 glue from the additional section, in wire order.
    pub glue: Vec<Ipv4Addr>,

    pub truncated: bool,
}

impl DnsResponse {
    pub fn answer(id: u16, answers: Vec<RecordEntry>) -> Self {
        Self {
            id,
            answer_count: answers.len(),
            answers,
            glue: Vec::new(),
            truncated: false,
        }
    }

    pub fn referral(id: u16, glue: Vec<Ipv4Addr>) -> Self {
        Self {
            id,
            answers: Vec::new(),
            answer_count: 0,
            glue,
            truncated: false,
        }
    }

    pub fn empty(id: u16) -> Self {
        Self::referral(id, Vec::new())
    }

    /// A non-empty answer section ends the referral walk.
    pub fn has_answer(&self) -> bool {
        self.answer_count > 0
    }

    pub fn first_glue(&self) -> Option<Ipv4Addr> {
        self.glue.first().copied()
    }

    /// Answer entries of one kind, in wire order.
    pub fn answers_of(&self, kind: RecordKind) -> impl Iterator<Item = &RecordEntry> {
        self.answers.iter().filter(move |entry| entry.kind() == kind)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8], server: SocketAddr) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| DomainError::Protocol {
            server: server.to_string(),
            reason: format!("Failed to parse DNS response: {}", e),
        })?;

        Ok(Self::from_message(&message))
    }

    pub fn from_message(message: &Message) -> DnsResponse {
        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut answers = Vec::with_capacity(message.answers().len());

        for record in message.answers() {
            let owner = || display_name(&record.name().to_utf8());

            match record.data() {
                RData::CNAME(canonical) => {
                    answers.push(RecordEntry::cname(owner(), display_name(&canonical.to_utf8())));
                }
                RData::A(a) => {
                    answers.push(RecordEntry::a(owner(), a.0));
                }
                RData::AAAA(aaaa) => {
                    answers.push(RecordEntry::aaaa(owner(), aaaa.0));
                }
                RData::MX(mx) => {
                    answers.push(RecordEntry::mx(
                        owner(),
                        mx.preference(),
                        display_name(&mx.exchange().to_utf8()),
                    ));
                }
                other => {
                    debug!(record_type = ?other.record_type(), "Skipping unreported answer record");
                }
            }
        }

        let glue: Vec<Ipv4Addr> = message
            .additionals()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            glue = glue.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        DnsResponse {
            id: message.id(),
            answers,
            answer_count: message.answers().len(),
            glue,
            truncated,
        }
    }
}
