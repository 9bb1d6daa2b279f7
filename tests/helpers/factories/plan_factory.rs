use crate::engine::aggregate::AggregatePlan;

pub struct PlanFactory {
    group_column: String,
    value_column: String,
    aggregates: Vec<String>,
}

impl PlanFactory {
    pub fn new() -> Self {
        Self {
            group_column: "host".to_string(),
            value_column: "value".to_string(),
            aggregates: ["min", "max", "avg", "sum"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn with_group_column(mut self, name: &str) -> Self {
        self.group_column = name.to_string();
        self
    }

    pub fn with_value_column(mut self, name: &str) -> Self {
        self.value_column = name.to_string();
        self
    }

    pub fn with_aggregates(mut self, names: &[&str]) -> Self {
        self.aggregates = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn create(self) -> AggregatePlan {
        AggregatePlan::parse(self.group_column, self.value_column, &self.aggregates)
            .expect("factory plan should parse")
    }
}
