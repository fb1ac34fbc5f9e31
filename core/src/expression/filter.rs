use serde::{Deserialize, Serialize};

use super::ConditionExpression;

/// Boolean combinator of a filter node.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

/// A node of the filter tree: conditions and nested filters combined by one
/// operator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FilterExpression {
    pub filter_operator: LogicalOperator,
    pub conditions: Vec<ConditionExpression>,
    pub filters: Vec<FilterExpression>,
}

impl FilterExpression {
    pub fn new(filter_operator: LogicalOperator) -> Self {
        Self {
            filter_operator,
            ..Self::default()
        }
    }

    pub fn add_condition(&mut self, condition: ConditionExpression) {
        self.conditions.push(condition);
    }

    pub fn add_filter(&mut self, filter: FilterExpression) {
        self.filters.push(filter);
    }

    /// True when the node holds neither conditions nor nested filters.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.filters.is_empty()
    }

    /// Depth of the tree rooted at this node (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.filters.iter().map(Self::depth).max().unwrap_or(0)
    }
}
