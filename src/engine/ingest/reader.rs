use super::errors::IngestError;
use crate::engine::core::Table;
use crate::engine::types::Scalar;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Reads a CSV file into a table. The first record is the header; every
/// data record must carry the same number of fields. Empty fields load
/// as nulls.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers().map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut table = Table::new(headers.iter().map(str::to_string).collect());
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        table.push_row(record.iter().map(Scalar::from_raw).collect());
    }

    info!(
        target: "rollup::ingest",
        rows = table.len(),
        columns = table.header.len(),
        path = %path.display(),
        "loaded input table"
    );
    Ok(table)
}
