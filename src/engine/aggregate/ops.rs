use super::plan::AggregateKind;
use crate::engine::types::Scalar;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Min {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Max {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Avg {
    pub total: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sum {
    pub total: f64,
    pub count: u64,
}

/// A single running aggregate calculation over one group's values.
///
/// Every kind finalizes to `Null` when it never observed a value, so
/// downstream output never invents a number for an empty group.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    Min(Min),
    Max(Max),
    Avg(Avg),
    Sum(Sum),
}

impl Aggregate {
    pub fn from_kind(kind: AggregateKind) -> Self {
        match kind {
            AggregateKind::Min => Aggregate::Min(Min::default()),
            AggregateKind::Max => Aggregate::Max(Max::default()),
            AggregateKind::Avg => Aggregate::Avg(Avg::default()),
            AggregateKind::Sum => Aggregate::Sum(Sum::default()),
        }
    }

    pub fn kind(&self) -> AggregateKind {
        match self {
            Aggregate::Min(_) => AggregateKind::Min,
            Aggregate::Max(_) => AggregateKind::Max,
            Aggregate::Avg(_) => AggregateKind::Avg,
            Aggregate::Sum(_) => AggregateKind::Sum,
        }
    }

    pub fn update(&mut self, value: f64) {
        match self {
            Aggregate::Min(state) => {
                state.value = Some(state.value.map_or(value, |cur| cur.min(value)));
            }
            Aggregate::Max(state) => {
                state.value = Some(state.value.map_or(value, |cur| cur.max(value)));
            }
            Aggregate::Avg(state) => {
                state.total += value;
                state.count += 1;
            }
            Aggregate::Sum(state) => {
                state.total += value;
                state.count += 1;
            }
        }
    }

    /// Folds another accumulator of the same kind into this one. Mismatched
    /// kinds leave this accumulator untouched.
    pub fn merge(&mut self, other: &Aggregate) {
        match (self, other) {
            (Aggregate::Min(state), Aggregate::Min(other)) => {
                state.value = match (state.value, other.value) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
            }
            (Aggregate::Max(state), Aggregate::Max(other)) => {
                state.value = match (state.value, other.value) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                };
            }
            (Aggregate::Avg(state), Aggregate::Avg(other)) => {
                state.total += other.total;
                state.count += other.count;
            }
            (Aggregate::Sum(state), Aggregate::Sum(other)) => {
                state.total += other.total;
                state.count += other.count;
            }
            _ => {}
        }
    }

    pub fn finalize(&self) -> Scalar {
        match self {
            Aggregate::Min(state) => state.value.map_or(Scalar::Null, Scalar::Float64),
            Aggregate::Max(state) => state.value.map_or(Scalar::Null, Scalar::Float64),
            Aggregate::Avg(state) => {
                if state.count == 0 {
                    Scalar::Null
                } else {
                    Scalar::Float64(state.total / state.count as f64)
                }
            }
            Aggregate::Sum(state) => {
                if state.count == 0 {
                    Scalar::Null
                } else {
                    Scalar::Float64(state.total)
                }
            }
        }
    }
}
