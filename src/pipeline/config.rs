use super::errors::SettingsError;
use crate::engine::schema::{ColumnType, TableSchema};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// Everything one pipeline run needs, loaded from a TOML file. Callers
/// pass the settings down explicitly; nothing reads them from a global.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupSettings {
    pub input_path: String,
    pub output_path: String,
    /// Declared input columns, in the order the header must carry them.
    pub columns: Vec<ColumnSpec>,
    pub group_column: String,
    pub value_column: String,
    pub aggregates: Vec<String>,
    #[serde(default)]
    pub rename: IndexMap<String, String>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

impl RollupSettings {
    /// Loads settings from a TOML file and validates the column wiring.
    pub fn load(path: &str) -> Result<Self, SettingsError> {
        let settings: RollupSettings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.columns.is_empty() {
            return Err(SettingsError::NoColumns);
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SettingsError::DuplicateColumn(column.name.clone()));
            }
        }
        if !self.columns.iter().any(|c| c.name == self.group_column) {
            return Err(SettingsError::UnknownGroupColumn(self.group_column.clone()));
        }
        if !self.columns.iter().any(|c| c.name == self.value_column) {
            return Err(SettingsError::UnknownValueColumn(self.value_column.clone()));
        }
        Ok(())
    }

    /// Declared input schema, in column order.
    pub fn schema(&self) -> TableSchema {
        TableSchema::from_columns(self.columns.iter().map(|c| (c.name.clone(), c.ty)))
    }
}
