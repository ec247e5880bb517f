pub mod result_aggregator;

pub use result_aggregator::{AddressView, AggregatedRecords, CnameView, MxView, ResultAggregator};
