mod record;
mod record_kind;

pub use record::{display_name, RecordEntry};
pub use record_kind::RecordKind;
