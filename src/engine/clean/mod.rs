pub mod cleaner;
pub mod errors;
pub mod explode;

pub use cleaner::Cleaner;
pub use errors::CleanError;
