pub mod errors;
pub mod reader;

pub use errors::IngestError;
pub use reader::read_table;
