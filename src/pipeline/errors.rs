use crate::engine::aggregate::AggregateError;
use crate::engine::clean::CleanError;
use crate::engine::ingest::IngestError;
use crate::engine::output::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("settings declare no input columns")]
    NoColumns,

    #[error("column `{0}` is declared more than once")]
    DuplicateColumn(String),

    #[error("group column `{0}` is not a declared input column")]
    UnknownGroupColumn(String),

    #[error("value column `{0}` is not a declared input column")]
    UnknownValueColumn(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("ingest: {0}")]
    Ingest(#[from] IngestError),

    #[error("clean: {0}")]
    Clean(#[from] CleanError),

    #[error("aggregate: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("output: {0}")]
    Output(#[from] OutputError),
}
