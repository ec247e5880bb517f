pub mod parallel;
pub mod sequential;
pub mod strategy;

pub use parallel::ParallelStrategy;
pub use sequential::SequentialStrategy;
pub use strategy::{RootIterationStrategy, UpstreamResult};

use rootwalk_domain::IterationStrategy;
use std::sync::Arc;

pub fn create_strategy(kind: IterationStrategy) -> Arc<dyn RootIterationStrategy> {
    match kind {
        IterationStrategy::Sequential => Arc::new(SequentialStrategy::new()),
        IterationStrategy::Parallel => Arc::new(ParallelStrategy::new()),
    }
}
