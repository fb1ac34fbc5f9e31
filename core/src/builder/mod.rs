//! Fluent builders.
//!
//! Every child builder is handed to a caller-supplied closure as a `&mut`
//! handle; once the closure returns, the parent takes the finished node.
//! Settings groups (`with()`) borrow their builder exclusively for a single
//! call and hand the builder back for further chaining.

mod cached;
mod condition;
mod filter;
mod link;
mod order;
mod paging;
mod query;

pub use cached::CachedQuery;
pub use condition::ConditionBuilder;
pub use filter::{FilterBuilder, FilterSettings};
pub use link::{LinkBuilder, LinkSettings};
pub use order::OrderBuilder;
pub use paging::PagingInfoBuilder;
pub use query::{QueryBuilder, QuerySettings};
