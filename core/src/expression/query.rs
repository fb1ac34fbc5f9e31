use serde::{Deserialize, Serialize};

use super::{ColumnSet, FilterExpression, LinkEntity, OrderExpression, PagingInfo};

/// The full, backend-independent description of an entity query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QueryExpression {
    pub entity_name: String,
    pub column_set: ColumnSet,
    pub criteria: Option<FilterExpression>,
    pub link_entities: Vec<LinkEntity>,
    pub orders: Vec<OrderExpression>,
    pub page_info: PagingInfo,
    pub top_count: Option<u32>,
    pub distinct: bool,
    pub no_lock: bool,
}

impl QueryExpression {
    /// Creates an expression for `entity_name` with no columns, no criteria,
    /// the first page and row locking disabled.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            column_set: ColumnSet::default(),
            criteria: None,
            link_entities: Vec::new(),
            orders: Vec::new(),
            page_info: PagingInfo::default(),
            top_count: None,
            distinct: false,
            no_lock: true,
        }
    }
}
