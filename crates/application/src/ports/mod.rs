mod name_resolver;
mod resolution_cache;

pub use name_resolver::NameResolver;
pub use resolution_cache::{CacheMetricsSnapshot, ResolutionCache};

// Re-export for convenience
pub use rootwalk_domain::ResolutionResult;
