pub mod errors;
pub mod writer;

pub use errors::OutputError;
pub use writer::{rename_columns, write_table};
