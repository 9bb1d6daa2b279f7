use crate::engine::schema::ColumnType;
use crate::test_helpers::factory::Factory;

#[test]
fn default_settings_validate() {
    let settings = Factory::settings().create();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.group_column, "host");
    assert_eq!(settings.value_column, "value");
    assert_eq!(settings.aggregates.len(), 4);
}

#[test]
fn column_and_rename_overrides_apply() {
    let settings = Factory::settings()
        .with_columns(&[("region", "string"), ("load", "float")])
        .with_group_column("region")
        .with_value_column("load")
        .with_rename("region", "zone")
        .create();

    assert_eq!(settings.columns.len(), 2);
    assert_eq!(settings.columns[1].ty, ColumnType::Float);
    assert_eq!(settings.rename.get("region"), Some(&"zone".to_string()));
    assert!(settings.validate().is_ok());
}
