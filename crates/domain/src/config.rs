pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{IterationStrategy, ResolverConfig, ROOT_SERVERS};
pub use root::{CliOverrides, Config, MAX_QUERY_TIMEOUT_SECS, MAX_REFERRAL_DEPTH};
