use super::errors::AggregateError;
use super::ops::Aggregate;
use super::plan::AggregatePlan;
use super::sink::AggregateSink;
use crate::engine::core::Table;
use tracing::info;

/// Groups a cleaned table by the plan's group column and computes the
/// requested stats over the value column.
#[derive(Debug, Clone)]
pub struct Aggregator {
    plan: AggregatePlan,
}

impl Aggregator {
    pub fn new(plan: AggregatePlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &AggregatePlan {
        &self.plan
    }

    /// Builds the grouped output table, one row per distinct group key in
    /// ascending key order. Value cells that do not carry a number are
    /// skipped; a group whose values were all skipped reports null stats.
    pub fn compute(&self, table: &Table) -> Result<Table, AggregateError> {
        let group_index =
            table
                .column_index(&self.plan.group_column)
                .ok_or_else(|| AggregateError::MissingColumn {
                    column: self.plan.group_column.clone(),
                })?;
        let value_index =
            table
                .column_index(&self.plan.value_column)
                .ok_or_else(|| AggregateError::MissingColumn {
                    column: self.plan.value_column.clone(),
                })?;

        info!(
            target: "rollup::aggregate",
            group = %self.plan.group_column,
            value = %self.plan.value_column,
            kinds = ?self.plan.kinds,
            "computing aggregates"
        );

        let mut sink = AggregateSink::new(&self.plan.kinds);
        for row in &table.rows {
            sink.observe(&row[group_index], row[value_index].as_f64());
        }

        let mut out = Table::new(self.plan.output_header());
        for (group, aggregates) in sink.into_sorted_groups() {
            let mut row = Vec::with_capacity(1 + aggregates.len());
            row.push(group);
            row.extend(aggregates.iter().map(Aggregate::finalize));
            out.push_row(row);
        }

        info!(target: "rollup::aggregate", groups = out.len(), "finished aggregation");
        Ok(out)
    }
}
