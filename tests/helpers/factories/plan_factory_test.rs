use crate::engine::aggregate::AggregateKind;
use crate::test_helpers::factory::Factory;

#[test]
fn default_plan_covers_every_stat() {
    let plan = Factory::plan().create();

    assert_eq!(plan.group_column, "host");
    assert_eq!(plan.value_column, "value");
    assert_eq!(plan.kinds.len(), 4);
}

#[test]
fn overrides_apply() {
    let plan = Factory::plan()
        .with_group_column("region")
        .with_value_column("load")
        .with_aggregates(&["sum"])
        .create();

    assert_eq!(plan.group_column, "region");
    assert_eq!(plan.value_column, "load");
    assert_eq!(plan.kinds, vec![AggregateKind::Sum]);
}
