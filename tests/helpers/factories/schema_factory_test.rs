use crate::engine::schema::ColumnType;
use crate::test_helpers::factory::Factory;

#[test]
fn builds_columns_in_call_order() {
    let schema = Factory::schema()
        .with("host", "string")
        .with("value", "float")
        .create();

    let names: Vec<&str> = schema.column_names().collect();
    assert_eq!(names, vec!["host", "value"]);
}

#[test]
fn with_replaces_an_existing_column_type() {
    let schema = Factory::schema()
        .with("value", "string")
        .with("value", "float")
        .create();

    assert_eq!(schema.len(), 1);
    assert_eq!(schema.column_type("value"), Some(ColumnType::Float));
}

#[test]
fn without_removes_a_column() {
    let schema = Factory::schema()
        .with("host", "string")
        .with("value", "float")
        .without("host")
        .create();

    assert_eq!(schema.len(), 1);
    assert!(!schema.contains("host"));
}

#[test]
fn unknown_type_names_fall_back_to_string() {
    let schema = Factory::schema().with("host", "mystery").create();
    assert_eq!(schema.column_type("host"), Some(ColumnType::String));
}
