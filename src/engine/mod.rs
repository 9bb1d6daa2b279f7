pub mod aggregate;
pub mod clean;
pub mod core;
pub mod ingest;
pub mod output;
pub mod schema;
pub mod types;
