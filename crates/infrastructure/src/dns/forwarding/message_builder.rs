//! DNS Message Builder
//!
//! Constructs query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DnsQuery, DomainError, RecordKind};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and serialize it to wire format bytes
    ///
    /// Creates a standard query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query(domain: &str, kind: RecordKind) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, kind).map(|(_, bytes)| bytes)
    }

    /// Build a query message and return both its ID and bytes
    ///
    /// The ID is what the response has to echo back.
    pub fn build_query_with_id(
        domain: &str,
        kind: RecordKind,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_with_fixed_id(id, domain, kind)?;
        Ok((id, bytes))
    }

    /// Convenience wrapper for a [`DnsQuery`].
    pub fn for_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        Self::build_query_with_id(&query.domain, query.kind)
    }

    pub(crate) fn build_with_fixed_id(
        id: u16,
        domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(kind));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
