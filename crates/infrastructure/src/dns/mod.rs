pub mod cache;
pub mod executor;
pub mod forwarding;
pub mod resolver;
pub mod root_iteration;
pub mod transport;

pub use cache::{CacheMetrics, InMemoryResolutionCache};
pub use executor::QueryExecutor;
pub use forwarding::{DnsExchange, DnsResponse, MessageBuilder, ResponseParser, UdpExchange};
pub use resolver::{CachedResolver, CoreResolver, ResolverBuilder};
pub use root_iteration::{
    create_strategy, ParallelStrategy, RootIterationStrategy, SequentialStrategy, UpstreamResult,
};
pub use transport::UdpTransport;
