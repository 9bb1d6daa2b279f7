pub mod aggregator;
pub mod errors;
pub mod ops;
pub mod plan;
pub mod sink;

pub use aggregator::Aggregator;
pub use errors::AggregateError;
pub use ops::Aggregate;
pub use plan::{AggregateKind, AggregatePlan};
pub use sink::AggregateSink;
