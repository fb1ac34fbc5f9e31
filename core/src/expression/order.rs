use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Ascending,
    Descending,
}

/// A single sort key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct OrderExpression {
    pub attribute_name: String,
    pub order_type: OrderType,
}

impl OrderExpression {
    pub fn new(attribute_name: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            order_type,
        }
    }
}
