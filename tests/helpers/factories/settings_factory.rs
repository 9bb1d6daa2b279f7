use crate::engine::schema::ColumnType;
use crate::pipeline::config::{ColumnSpec, LoggingSettings, RollupSettings};
use indexmap::IndexMap;

pub struct SettingsFactory {
    settings: RollupSettings,
}

impl SettingsFactory {
    pub fn new() -> Self {
        Self {
            settings: RollupSettings {
                input_path: "input.csv".to_string(),
                output_path: "output.csv".to_string(),
                columns: vec![
                    ColumnSpec {
                        name: "host".to_string(),
                        ty: ColumnType::String,
                    },
                    ColumnSpec {
                        name: "value".to_string(),
                        ty: ColumnType::Float,
                    },
                ],
                group_column: "host".to_string(),
                value_column: "value".to_string(),
                aggregates: ["min", "max", "avg", "sum"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                rename: IndexMap::new(),
                logging: LoggingSettings::default(),
            },
        }
    }

    pub fn with_input_path(mut self, path: &str) -> Self {
        self.settings.input_path = path.to_string();
        self
    }

    pub fn with_output_path(mut self, path: &str) -> Self {
        self.settings.output_path = path.to_string();
        self
    }

    pub fn with_columns(mut self, columns: &[(&str, &str)]) -> Self {
        self.settings.columns = columns
            .iter()
            .map(|(name, ty)| ColumnSpec {
                name: name.to_string(),
                ty: ColumnType::from_primitive_str(ty).unwrap_or(ColumnType::String),
            })
            .collect();
        self
    }

    pub fn with_group_column(mut self, name: &str) -> Self {
        self.settings.group_column = name.to_string();
        self
    }

    pub fn with_value_column(mut self, name: &str) -> Self {
        self.settings.value_column = name.to_string();
        self
    }

    pub fn with_aggregates(mut self, names: &[&str]) -> Self {
        self.settings.aggregates = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_rename(mut self, from: &str, to: &str) -> Self {
        self.settings
            .rename
            .insert(from.to_string(), to.to_string());
        self
    }

    pub fn create(self) -> RollupSettings {
        self.settings
    }
}
