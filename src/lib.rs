pub mod engine;
pub mod logging;
pub mod pipeline;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
