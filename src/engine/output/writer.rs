use super::errors::OutputError;
use crate::engine::core::Table;
use crate::engine::types::Scalar;
use indexmap::IndexMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Applies a rename mapping to the table header. Entries naming a column
/// the table does not have are skipped.
pub fn rename_columns(table: &mut Table, renames: &IndexMap<String, String>) {
    for (from, to) in renames {
        if table.rename_column(from, to) {
            debug!(target: "rollup::output", from = %from, to = %to, "renamed column");
        } else {
            debug!(target: "rollup::output", column = %from, "rename skipped, column not present");
        }
    }
}

/// Writes the table as CSV, header first. Null cells become empty fields
/// and floats keep their fractional point.
pub fn write_table(table: &Table, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(&table.header)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(Scalar::to_csv_field))
            .map_err(|source| OutputError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        target: "rollup::output",
        rows = table.len(),
        path = %path.display(),
        "wrote output table"
    );
    Ok(())
}
