//! Mapping from `rootwalk_domain::RecordKind` to `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use rootwalk_domain::RecordKind;

/// Maps domain kinds onto hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordKind → hickory RecordType (for building queries)
    pub fn to_hickory(kind: RecordKind) -> HickoryRecordType {
        match kind {
            RecordKind::CNAME => HickoryRecordType::CNAME,
            RecordKind::A => HickoryRecordType::A,
            RecordKind::AAAA => HickoryRecordType::AAAA,
            RecordKind::MX => HickoryRecordType::MX,
        }
    }
}
