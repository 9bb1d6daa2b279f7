use super::ops::Aggregate;
use super::plan::AggregateKind;
use crate::engine::types::{Scalar, ScalarKey};
use std::collections::HashMap;

/// Accumulates per-group aggregate state as rows stream in.
///
/// Each distinct group key owns one accumulator per requested kind.
/// Accumulators are created the first time a group key is seen, even if
/// that row carries no usable value.
#[derive(Debug)]
pub struct AggregateSink {
    kinds: Vec<AggregateKind>,
    groups: HashMap<ScalarKey, (Scalar, Vec<Aggregate>), ahash::RandomState>,
}

impl AggregateSink {
    pub fn new(kinds: &[AggregateKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            groups: HashMap::default(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Feeds one row's group key and value into the sink. A `None` value
    /// registers the group without updating its accumulators.
    pub fn observe(&mut self, group: &Scalar, value: Option<f64>) {
        let kinds = &self.kinds;
        let (_, aggregates) = self.groups.entry(group.key()).or_insert_with(|| {
            (
                group.clone(),
                kinds.iter().map(|kind| Aggregate::from_kind(*kind)).collect(),
            )
        });
        if let Some(value) = value {
            for aggregate in aggregates.iter_mut() {
                aggregate.update(value);
            }
        }
    }

    /// Drains the sink into `(group, accumulators)` pairs sorted by group
    /// key, matching the order the grouped output is written in.
    pub fn into_sorted_groups(self) -> Vec<(Scalar, Vec<Aggregate>)> {
        let mut groups: Vec<(Scalar, Vec<Aggregate>)> = self.groups.into_values().collect();
        groups.sort_by(|a, b| a.0.compare(&b.0));
        groups
    }
}
