use crate::engine::types::Scalar;
use crate::test_helpers::factory::Factory;

#[test]
fn builds_a_table_with_header_and_rows() {
    let table = Factory::table()
        .with_header(&["host", "value"])
        .with_str_row(&["a", "1.5"])
        .with_row(vec![Scalar::Utf8("b".into()), Scalar::Float64(2.0)])
        .create();

    assert_eq!(table.header, vec!["host".to_string(), "value".to_string()]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1][1], Scalar::Float64(2.0));
}

#[test]
fn str_rows_load_empty_cells_as_nulls() {
    let table = Factory::table()
        .with_header(&["host", "value"])
        .with_str_row(&["", "1.5"])
        .create();

    assert_eq!(table.rows[0][0], Scalar::Null);
    assert_eq!(table.rows[0][1], Scalar::Utf8("1.5".into()));
}
