use rootwalk_application::ports::{NameResolver, ResolutionCache};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{InMemoryResolutionCache, ResolverBuilder, UdpExchange};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<dyn NameResolver>,
    pub cache: Arc<dyn ResolutionCache>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!(
            roots = config.resolver.root_servers.len(),
            strategy = config.resolver.strategy.as_str(),
            "Initializing DNS services"
        );

        let cache: Arc<dyn ResolutionCache> = Arc::new(InMemoryResolutionCache::new());

        let resolver = ResolverBuilder::new(config.resolver.clone())
            .with_exchange(Arc::new(UdpExchange::new()))
            .with_cache(Arc::clone(&cache))
            .build();

        Self { resolver, cache }
    }
}
