pub mod plan_factory;
pub mod schema_factory;
pub mod settings_factory;
pub mod table_factory;

pub use plan_factory::PlanFactory;
pub use schema_factory::SchemaFactory;
pub use settings_factory::SettingsFactory;
pub use table_factory::TableFactory;

#[cfg(test)]
mod plan_factory_test;
#[cfg(test)]
mod schema_factory_test;
#[cfg(test)]
mod settings_factory_test;
#[cfg(test)]
mod table_factory_test;
