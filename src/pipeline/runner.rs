use super::config::RollupSettings;
use super::errors::PipelineError;
use crate::engine::aggregate::{AggregatePlan, Aggregator};
use crate::engine::clean::Cleaner;
use crate::engine::ingest;
use crate::engine::output;
use std::path::Path;
use tracing::{info, warn};

/// Counters describing one finished pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub groups_written: usize,
}

/// Runs the whole pipeline against the given settings: read the input
/// CSV, clean it, aggregate it, apply renames and write the output CSV.
pub fn run(settings: &RollupSettings) -> Result<RunSummary, PipelineError> {
    info!(target: "rollup::pipeline", input = %settings.input_path, "starting rollup");

    let plan = AggregatePlan::parse(
        &settings.group_column,
        &settings.value_column,
        &settings.aggregates,
    )?;
    let schema = settings.schema();
    if schema
        .column_type(&settings.value_column)
        .is_some_and(|ty| !ty.is_numeric())
    {
        warn!(
            target: "rollup::pipeline",
            column = %settings.value_column,
            "value column is not declared numeric"
        );
    }

    let table = ingest::read_table(Path::new(&settings.input_path))?;
    let rows_read = table.len();

    let cleaned = Cleaner::new(schema).normalize(table)?;
    let rows_kept = cleaned.len();

    let mut result = Aggregator::new(plan).compute(&cleaned)?;

    output::rename_columns(&mut result, &settings.rename);
    output::write_table(&result, Path::new(&settings.output_path))?;

    let summary = RunSummary {
        rows_read,
        rows_kept,
        groups_written: result.len(),
    };
    info!(
        target: "rollup::pipeline",
        rows_read = summary.rows_read,
        rows_kept = summary.rows_kept,
        groups = summary.groups_written,
        output = %settings.output_path,
        "finished rollup"
    );
    Ok(summary)
}
