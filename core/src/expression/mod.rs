//! Query expression data model.
//!
//! These are the finished nodes produced by the builders in
//! [`crate::builder`]. They are plain owned values: serializable so a
//! query can be fingerprinted, cloneable so a backend can keep them.

mod columns;
mod condition;
mod filter;
mod link;
mod order;
mod paging;
mod query;

pub use columns::ColumnSet;
pub use condition::{ConditionExpression, ConditionOperator};
pub use filter::{FilterExpression, LogicalOperator};
pub use link::{JoinOperator, LinkEntity};
pub use order::{OrderExpression, OrderType};
pub use paging::PagingInfo;
pub use query::QueryExpression;
