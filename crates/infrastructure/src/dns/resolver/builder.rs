use super::cache_layer::CachedResolver;
use super::core::CoreResolver;
use crate::dns::executor::QueryExecutor;
use crate::dns::forwarding::{DnsExchange, UdpExchange};
use crate::dns::root_iteration::{create_strategy, RootIterationStrategy};
use rootwalk_application::ports::{NameResolver, ResolutionCache};
use rootwalk_domain::ResolverConfig;
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    config: ResolverConfig,
    exchange: Option<Arc<dyn DnsExchange>>,
    strategy: Option<Arc<dyn RootIterationStrategy>>,
    cache: Option<Arc<dyn ResolutionCache>>,
}

impl ResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            exchange: None,
            strategy: None,
            cache: None,
        }
    }

    pub fn with_exchange(mut self, exchange: Arc<dyn DnsExchange>) -> Self {
        self.exchange = Some(exchange);
        self
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn RootIterationStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Arc<dyn NameResolver> {
        let strategy = self
            .strategy
            .unwrap_or_else(|| create_strategy(self.config.strategy));

        info!(
            roots = self.config.root_servers.len(),
            port = self.config.port,
            strategy = strategy.name(),
            cache = self.cache.is_some(),
            "Building resolver"
        );

        let exchange = self
            .exchange
            .unwrap_or_else(|| Arc::new(UdpExchange::new()));
        let executor = Arc::new(QueryExecutor::from_config(exchange, &self.config));

        let core = CoreResolver::new(executor, self.config.root_servers.clone(), strategy);
        let mut resolver: Arc<dyn NameResolver> = Arc::new(core);

        if let Some(cache) = self.cache {
            resolver = Arc::new(CachedResolver::new(resolver, cache));
        }

        info!("Resolver built successfully");
        resolver
    }
}
