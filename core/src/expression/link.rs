use serde::{Deserialize, Serialize};

use super::{ColumnSet, FilterExpression};

/// The type of join performed by a link entity
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinOperator {
    #[default]
    Inner,
    LeftOuter,
    /// Joined on the configured keys like `Inner`; only matching rows are kept
    Natural,
}

/// A join edge from one entity attribute to another.
///
/// The four join keys have no defaults. A link with an unset key is still a
/// valid value; it is the backend that rejects it on execution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LinkEntity {
    pub link_from_entity_name: Option<String>,
    pub link_from_attribute_name: Option<String>,
    pub link_to_entity_name: Option<String>,
    pub link_to_attribute_name: Option<String>,
    pub entity_alias: Option<String>,
    pub join_operator: JoinOperator,
    pub columns: ColumnSet,
    pub link_criteria: Option<FilterExpression>,
    pub link_entities: Vec<LinkEntity>,
}

impl LinkEntity {
    /// Name conditions use to address this link: the alias, else the target entity.
    pub fn scope_name(&self) -> Option<&str> {
        self.entity_alias
            .as_deref()
            .or(self.link_to_entity_name.as_deref())
    }
}
