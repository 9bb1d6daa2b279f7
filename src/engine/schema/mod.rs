pub mod table_schema;
pub mod types;

pub use table_schema::TableSchema;
pub use types::ColumnType;
