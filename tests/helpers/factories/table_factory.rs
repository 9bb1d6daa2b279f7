use crate::engine::core::Table;
use crate::engine::types::Scalar;

pub struct TableFactory {
    header: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl TableFactory {
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_header(mut self, names: &[&str]) -> Self {
        self.header = names.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Appends a row of raw text cells, the way they arrive from a CSV
    /// file. Empty strings load as nulls.
    pub fn with_str_row(mut self, cells: &[&str]) -> Self {
        self.rows
            .push(cells.iter().map(|cell| Scalar::from_raw(cell)).collect());
        self
    }

    pub fn with_row(mut self, row: Vec<Scalar>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn create(self) -> Table {
        let mut table = Table::new(self.header);
        for row in self.rows {
            table.push_row(row);
        }
        table
    }
}
