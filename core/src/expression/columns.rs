use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The attributes a query (or a link entity) returns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSet {
    /// Every attribute of the entity.
    All,
    /// An explicit set of attribute names.
    Columns(BTreeSet<String>),
}

impl Default for ColumnSet {
    fn default() -> Self {
        ColumnSet::Columns(BTreeSet::new())
    }
}

impl ColumnSet {
    /// Merges `names` into the explicit set.
    ///
    /// An `All` set is replaced by the explicit names: the last request wins.
    pub fn add_columns<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            ColumnSet::Columns(columns) => columns.extend(names.into_iter().map(Into::into)),
            ColumnSet::All => {
                *self = ColumnSet::Columns(names.into_iter().map(Into::into).collect());
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ColumnSet::All)
    }

    /// Returns true when `name` would be part of a projection using this set.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            ColumnSet::All => true,
            ColumnSet::Columns(columns) => columns.contains(name),
        }
    }

    /// Explicit column names, empty for `All`.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            ColumnSet::All => Vec::new(),
            ColumnSet::Columns(columns) => columns.iter().map(String::as_str).collect(),
        }
    }
}
