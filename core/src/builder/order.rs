use crate::expression::{OrderExpression, OrderType};

/// Builds one sort key. Direction defaults to ascending.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    order: OrderExpression,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(&mut self, attribute_name: impl Into<String>) -> &mut Self {
        self.order.attribute_name = attribute_name.into();
        self
    }

    pub fn ascending(&mut self) -> &mut Self {
        self.order.order_type = OrderType::Ascending;
        self
    }

    pub fn descending(&mut self) -> &mut Self {
        self.order.order_type = OrderType::Descending;
        self
    }

    pub fn build(self) -> OrderExpression {
        self.order
    }
}
