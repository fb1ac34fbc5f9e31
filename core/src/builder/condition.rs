use serde_json::Value;

use crate::expression::{ConditionExpression, ConditionOperator};

/// Builds a single [`ConditionExpression`].
#[derive(Debug, Default)]
pub struct ConditionBuilder {
    condition: ConditionExpression,
}

impl ConditionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes the condition to an entity name or link alias.
    pub fn of(&mut self, entity_name: impl Into<String>) -> &mut Self {
        self.condition.entity_name = Some(entity_name.into());
        self
    }

    pub fn named(&mut self, attribute_name: impl Into<String>) -> &mut Self {
        self.condition.attribute_name = attribute_name.into();
        self
    }

    pub fn is(&mut self, operator: ConditionOperator) -> &mut Self {
        self.condition.operator = operator;
        self
    }

    /// Appends one value; call repeatedly for multi-value operators.
    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.condition.values.push(value.into());
        self
    }

    pub fn values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.condition
            .values
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ConditionExpression {
        self.condition
    }
}
