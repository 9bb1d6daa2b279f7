pub use super::factories::{PlanFactory, SchemaFactory, SettingsFactory, TableFactory};

pub struct Factory;

impl Factory {
    pub fn schema() -> SchemaFactory {
        SchemaFactory::new()
    }

    pub fn table() -> TableFactory {
        TableFactory::new()
    }

    pub fn plan() -> PlanFactory {
        PlanFactory::new()
    }

    pub fn settings() -> SettingsFactory {
        SettingsFactory::new()
    }
}
