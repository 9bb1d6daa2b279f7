use crate::engine::schema::ColumnType;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CleanError {
    #[error("input columns {found:?} do not match declared columns {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A cell could not be cast to its column's declared type. `row` is
    /// the 1-based position of the offending row at the coercion stage,
    /// after list expansion.
    #[error("cannot coerce `{value}` to {target} (column `{column}`, row {row})")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
        target: ColumnType,
    },

    #[error("no numeric columns declared, nothing to filter on")]
    NoNumericColumns,
}
