use super::errors::CleanError;
use super::explode;
use crate::engine::core::Table;
use crate::engine::schema::TableSchema;
use crate::engine::types::{Scalar, ScalarKey};
use std::collections::HashSet;
use tracing::{debug, info};

/// Normalizes a raw input table against its declared schema: validates
/// the header, expands list-like cells, drops unusable rows and casts
/// every cell to its column's declared type.
#[derive(Debug, Clone)]
pub struct Cleaner {
    schema: TableSchema,
}

impl Cleaner {
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Runs the full cleaning chain. The positive-value filter only runs
    /// when the schema declares at least one numeric column; everything
    /// else applies unconditionally.
    pub fn normalize(&self, table: Table) -> Result<Table, CleanError> {
        info!(target: "rollup::clean", rows = table.len(), "normalizing input table");

        self.validate_columns(&table)?;
        let table = explode::explode_list_cells(table);
        let table = self.drop_null_rows(table);
        let table = self.coerce_types(table)?;
        let table = if self.schema.numeric_columns().is_empty() {
            debug!(target: "rollup::clean", "no numeric columns declared, skipping positive filter");
            table
        } else {
            self.retain_positive(table)?
        };
        let table = self.drop_duplicate_rows(table);

        info!(target: "rollup::clean", rows = table.len(), "finished cleaning");
        Ok(table)
    }

    /// The input header must carry exactly the declared columns, in
    /// declaration order.
    pub fn validate_columns(&self, table: &Table) -> Result<(), CleanError> {
        let expected: Vec<String> = self.schema.column_names().map(str::to_string).collect();
        if table.header != expected {
            return Err(CleanError::ColumnMismatch {
                expected,
                found: table.header.clone(),
            });
        }
        Ok(())
    }

    /// Drops every row holding a null or empty-string cell.
    pub fn drop_null_rows(&self, mut table: Table) -> Table {
        let before = table.len();
        table
            .rows
            .retain(|row| !row.iter().any(|cell| cell.is_null() || cell.as_str() == Some("")));
        let dropped = before - table.len();
        if dropped > 0 {
            debug!(target: "rollup::clean", dropped, "dropped rows with missing values");
        }
        table
    }

    /// Casts each cell to its column's declared type. Header columns
    /// without a schema entry are left untouched.
    pub fn coerce_types(&self, mut table: Table) -> Result<Table, CleanError> {
        let Table { header, rows } = &mut table;
        for (row_index, row) in rows.iter_mut().enumerate() {
            for (index, column) in header.iter().enumerate() {
                let Some(ty) = self.schema.column_type(column) else {
                    continue;
                };
                let cell = &mut row[index];
                match ty.coerce(cell) {
                    Some(coerced) => *cell = coerced,
                    None => {
                        return Err(CleanError::TypeCoercion {
                            column: column.clone(),
                            row: row_index + 1,
                            value: cell.to_csv_field(),
                            target: ty,
                        });
                    }
                }
            }
        }
        Ok(table)
    }

    /// Keeps rows where every numeric cell is strictly greater than zero.
    /// Errors when the schema declares no numeric column at all.
    pub fn retain_positive(&self, mut table: Table) -> Result<Table, CleanError> {
        let numeric = self.schema.numeric_columns();
        if numeric.is_empty() {
            return Err(CleanError::NoNumericColumns);
        }
        let indices: Vec<usize> = numeric
            .iter()
            .filter_map(|name| table.column_index(name))
            .collect();

        let before = table.len();
        table
            .rows
            .retain(|row| indices.iter().all(|&i| row[i].as_f64().is_some_and(|f| f > 0.0)));
        let dropped = before - table.len();
        if dropped > 0 {
            debug!(target: "rollup::clean", dropped, columns = ?numeric, "dropped rows with non-positive values");
        }
        Ok(table)
    }

    /// Removes exact duplicate rows, keeping the first occurrence.
    pub fn drop_duplicate_rows(&self, mut table: Table) -> Table {
        let mut seen: HashSet<Vec<ScalarKey>, ahash::RandomState> = HashSet::default();
        let before = table.len();
        table
            .rows
            .retain(|row| seen.insert(row.iter().map(Scalar::key).collect()));
        let dropped = before - table.len();
        if dropped > 0 {
            debug!(target: "rollup::clean", dropped, "dropped duplicate rows");
        }
        table
    }
}
