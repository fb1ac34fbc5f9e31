use crate::expression::{FilterExpression, LogicalOperator};

use super::ConditionBuilder;

/// Builds one node of a filter tree.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    filter: FilterExpression,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `build` against a fresh builder and returns the finished node.
    pub fn build_with<F>(build: F) -> FilterExpression
    where
        F: FnOnce(&mut FilterBuilder),
    {
        let mut builder = FilterBuilder::new();
        build(&mut builder);
        builder.build()
    }

    /// Appends a condition built by `build`.
    pub fn attribute<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ConditionBuilder),
    {
        let mut condition = ConditionBuilder::new();
        build(&mut condition);
        self.filter.add_condition(condition.build());
        self
    }

    /// Appends a nested filter built by `build`.
    pub fn r#where<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut FilterBuilder),
    {
        self.filter.add_filter(Self::build_with(build));
        self
    }

    pub fn with(&mut self) -> FilterSettings<'_> {
        FilterSettings { filter: self }
    }

    pub fn build(self) -> FilterExpression {
        self.filter
    }
}

/// Settings of a filter node.
pub struct FilterSettings<'a> {
    filter: &'a mut FilterBuilder,
}

impl<'a> FilterSettings<'a> {
    /// Sets how the node combines its children. Defaults to `And`.
    pub fn operator(self, operator: LogicalOperator) -> &'a mut FilterBuilder {
        self.filter.filter.filter_operator = operator;
        self.filter
    }
}
