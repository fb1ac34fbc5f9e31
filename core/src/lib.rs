//! Core types for fluent-query.
//!
//! A [`QueryExpression`] is the structural description of an entity query:
//! columns, a boolean filter tree, link (join) entities, orders, paging and
//! a handful of flags. [`QueryBuilder`] assembles one through chained calls
//! and closures over child builders, executes it against a [`Backend`] and,
//! when a [`QueryCache`] is attached, memoizes results keyed by the
//! expression's fingerprint.

#[macro_use]
mod tracing;

pub mod backend;
pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod expression;
pub mod fingerprint;
#[cfg(feature = "memory")]
pub mod memory;
pub mod record;

pub use backend::{Backend, PageResult, QueryExt};
pub use builder::{
    CachedQuery, ConditionBuilder, FilterBuilder, FilterSettings, LinkBuilder, LinkSettings,
    OrderBuilder, PagingInfoBuilder, QueryBuilder, QuerySettings,
};
pub use cache::{MemoryCache, QueryCache};
pub use config::{CacheConfig, ConfigError, FluentQueryConfig, QueryDefaults};
pub use error::{FluentQueryError, Result};
pub use expression::{
    ColumnSet, ConditionExpression, ConditionOperator, FilterExpression, JoinOperator,
    LinkEntity, LogicalOperator, OrderExpression, OrderType, PagingInfo, QueryExpression,
};
pub use fingerprint::{RetrievalMode, cache_key, fingerprint};
#[cfg(feature = "memory")]
pub use memory::InMemoryBackend;
pub use record::{FromRecord, Record, deserialize_record};
