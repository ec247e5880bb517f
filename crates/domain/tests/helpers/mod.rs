mod builders;

pub use builders::ResolutionResultBuilder;
