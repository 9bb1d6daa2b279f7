use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AggregateError {
    #[error("unsupported aggregate `{0}` (supported: min, max, avg, sum)")]
    UnknownAggregate(String),

    #[error("no aggregate calculations requested")]
    NoAggregates,

    #[error("input table does not contain column `{column}`")]
    MissingColumn { column: String },
}
