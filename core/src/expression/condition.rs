use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison applied by a single condition.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    #[default]
    Equal,
    NotEqual,
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    /// SQL-style pattern with `%` and `_` wildcards
    Like,
    NotLike,
    BeginsWith,
    EndsWith,
    In,
    NotIn,
    /// Inclusive range, expects exactly two values
    Between,
    NotBetween,
    Null,
    NotNull,
}

impl ConditionOperator {
    /// Number of values the operator expects, `None` when any count is accepted.
    pub const fn arity(self) -> Option<usize> {
        match self {
            ConditionOperator::Null | ConditionOperator::NotNull => Some(0),
            ConditionOperator::Between | ConditionOperator::NotBetween => Some(2),
            ConditionOperator::In | ConditionOperator::NotIn => None,
            _ => Some(1),
        }
    }
}

/// A leaf predicate: `[scope.]attribute <operator> values`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ConditionExpression {
    /// Entity name or link alias the attribute belongs to, `None` for the
    /// entity that owns the filter
    pub entity_name: Option<String>,
    pub attribute_name: String,
    pub operator: ConditionOperator,
    pub values: Vec<Value>,
}

impl ConditionExpression {
    pub fn new(
        attribute_name: impl Into<String>,
        operator: ConditionOperator,
        values: Vec<Value>,
    ) -> Self {
        Self {
            entity_name: None,
            attribute_name: attribute_name.into(),
            operator,
            values,
        }
    }
}
