pub mod config;
pub mod errors;
pub mod runner;

pub use config::RollupSettings;
pub use errors::{PipelineError, SettingsError};
pub use runner::{RunSummary, run};
