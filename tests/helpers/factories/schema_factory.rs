use crate::engine::schema::{ColumnType, TableSchema};

pub struct SchemaFactory {
    columns: Vec<(String, ColumnType)>,
}

impl SchemaFactory {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn with(mut self, name: &str, ty: &str) -> Self {
        let ty = ColumnType::from_primitive_str(ty).unwrap_or(ColumnType::String);
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = ty,
            None => self.columns.push((name.to_string(), ty)),
        }
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.columns.retain(|(n, _)| n != name);
        self
    }

    pub fn create(self) -> TableSchema {
        TableSchema::from_columns(self.columns)
    }
}
