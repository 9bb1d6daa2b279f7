use crate::engine::types::Scalar;

/// Row-major table carried between pipeline stages.
///
/// Invariant: every row holds exactly `header.len()` cells. Stages that
/// rebuild rows are responsible for keeping the arity intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Scalar>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Scalar>) {
        debug_assert_eq!(row.len(), self.header.len(), "row arity mismatch");
        self.rows.push(row);
    }

    /// Number of data rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    /// Renames a header column in place. Returns `false` when the column
    /// is absent, leaving the table untouched.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(index) => {
                self.header[index] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Sorts rows by the given column using the scalar ordering. The sort
    /// is stable so ties keep their original relative order.
    pub fn sort_by_column(&mut self, index: usize) {
        debug_assert!(index < self.header.len(), "sort column out of range");
        self.rows.sort_by(|a, b| a[index].compare(&b[index]));
    }
}
