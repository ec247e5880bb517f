use crate::ports::NameResolver;
use crate::services::{AggregatedRecords, ResultAggregator};
use rootwalk_domain::{LookupStatus, RecordKind, ResolutionResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Everything reported for one requested name.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub name: Arc<str>,

    #[serde(flatten)]
    pub records: AggregatedRecords,

    #[serde(skip)]
    pub result: Arc<ResolutionResult>,

    #[serde(skip)]
    pub cache_hit: bool,

    #[serde(skip)]
    pub elapsed_ms: u64,
}

impl HostReport {
    pub fn status(&self, kind: RecordKind) -> LookupStatus {
        self.result.status(kind)
    }
}

pub struct LookupHostsUseCase {
    resolver: Arc<dyn NameResolver>,
}

impl LookupHostsUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves each name in turn, in the order given. Repeated names are
    /// served from the resolver's cache.
    pub async fn execute(&self, names: &[String]) -> Vec<HostReport> {
        let mut reports = Vec::with_capacity(names.len());
        for name in names {
            reports.push(self.lookup(name).await);
        }
        reports
    }

    pub async fn lookup(&self, name: &str) -> HostReport {
        let start = Instant::now();
        let cache_hit = self.resolver.try_cache(name).is_some();

        let result = self.resolver.resolve(name).await;
        let records = ResultAggregator::aggregate(&result);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if result.is_empty() {
            debug!(domain = %name, cache_hit, "No records collected");
        } else {
            info!(
                domain = %name,
                records = result.len(),
                cache_hit,
                elapsed_ms,
                "Lookup complete"
            );
        }

        HostReport {
            name: Arc::from(name),
            records,
            result,
            cache_hit,
            elapsed_ms,
        }
    }
}
