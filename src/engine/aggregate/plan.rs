use super::errors::AggregateError;
use crate::engine::core::Table;
use std::fmt;
use std::str::FromStr;

/// One of the supported aggregate calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    Min,
    Max,
    Avg,
    Sum,
}

impl AggregateKind {
    /// Every supported kind, in canonical output order.
    pub const ALL: [AggregateKind; 4] = [
        AggregateKind::Min,
        AggregateKind::Max,
        AggregateKind::Avg,
        AggregateKind::Sum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateKind::Min => "min",
            AggregateKind::Max => "max",
            AggregateKind::Avg => "avg",
            AggregateKind::Sum => "sum",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateKind {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(AggregateKind::Min),
            "max" => Ok(AggregateKind::Max),
            "avg" | "mean" => Ok(AggregateKind::Avg),
            "sum" => Ok(AggregateKind::Sum),
            _ => Err(AggregateError::UnknownAggregate(s.to_string())),
        }
    }
}

/// What to aggregate: values from `value_column`, grouped by the distinct
/// values of `group_column`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePlan {
    pub group_column: String,
    pub value_column: String,
    pub kinds: Vec<AggregateKind>,
}

impl AggregatePlan {
    /// Parses the requested aggregate names into a plan. Duplicates
    /// collapse, and the kinds always come out in canonical order
    /// regardless of how the request was spelled.
    pub fn parse<S: AsRef<str>>(
        group_column: impl Into<String>,
        value_column: impl Into<String>,
        aggregates: &[S],
    ) -> Result<Self, AggregateError> {
        let mut requested = Vec::with_capacity(aggregates.len());
        for name in aggregates {
            requested.push(name.as_ref().parse::<AggregateKind>()?);
        }
        let kinds: Vec<AggregateKind> = AggregateKind::ALL
            .iter()
            .copied()
            .filter(|kind| requested.contains(kind))
            .collect();
        if kinds.is_empty() {
            return Err(AggregateError::NoAggregates);
        }
        Ok(Self {
            group_column: group_column.into(),
            value_column: value_column.into(),
            kinds,
        })
    }

    /// Checks that the table carries both columns the plan needs.
    pub fn validate(&self, table: &Table) -> Result<(), AggregateError> {
        for column in [&self.group_column, &self.value_column] {
            if table.column_index(column).is_none() {
                return Err(AggregateError::MissingColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// Header of the aggregated output: the group column followed by one
    /// column per requested stat.
    pub fn output_header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(1 + self.kinds.len());
        header.push(self.group_column.clone());
        header.extend(self.kinds.iter().map(|kind| kind.as_str().to_string()));
        header
    }
}
