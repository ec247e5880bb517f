//! rootwalk domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;

pub use config::{CliOverrides, Config, ConfigError, IterationStrategy, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{display_name, RecordEntry, RecordKind};
pub use errors::{DomainError, FailureClass};
pub use resolution::{LookupStatus, ResolutionResult};
