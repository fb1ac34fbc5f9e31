//! # fluent-query
//!
//! A fluent builder for entity query expressions: columns, nested boolean
//! filters, link entities (joins), orders and paging, executed against a
//! pluggable backend and optionally memoized in an expiring cache.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluent_query::prelude::*;
//! use fluent_query::memory::InMemoryBackend;
//!
//! # fn main() -> fluent_query::Result<()> {
//! let backend = InMemoryBackend::with_records([
//!     Record::new("account").with_attribute("name", "Adventure Works"),
//!     Record::new("account").with_attribute("name", "Contoso"),
//! ]);
//!
//! let accounts = backend
//!     .query("account")
//!     .include_columns(["name"])
//!     .r#where(|f| {
//!         f.attribute(|a| {
//!             a.named("name").is(ConditionOperator::Equal).value("Adventure Works");
//!         });
//!     })
//!     .retrieve()?;
//!
//! assert_eq!(accounts.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Caching
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use fluent_query::prelude::*;
//! use fluent_query::memory::InMemoryBackend;
//!
//! # fn main() -> fluent_query::Result<()> {
//! let backend = InMemoryBackend::with_records([Record::new("account")]);
//! let cache = MemoryCache::new();
//!
//! for _ in 0..2 {
//!     backend
//!         .query("account")
//!         .include_all_columns()
//!         .use_cache(&cache, Utc::now() + Duration::hours(1))
//!         .retrieve_all()?;
//! }
//!
//! assert_eq!(backend.executions(), 1);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for query operations
pub use fluent_query_core::error::Result;

/// Error types
pub mod error {
    pub use fluent_query_core::config::ConfigError;
    pub use fluent_query_core::error::FluentQueryError;
}

/// Query expression data model.
pub use fluent_query_core::expression;

/// Fluent builders for queries, filters, links, orders and paging.
pub use fluent_query_core::builder;

/// Backend seam and entry points.
pub use fluent_query_core::backend;

/// Cache seam and the in-process cache.
pub use fluent_query_core::cache;

/// Configuration loaded from `fluent-query.toml`.
pub use fluent_query_core::config;

/// Query fingerprints used as cache keys.
pub use fluent_query_core::fingerprint;

/// Records and record conversion.
pub use fluent_query_core::record;

/// In-memory backend for tests and local fakes.
#[cfg(feature = "memory")]
pub use fluent_query_core::memory;

/// Import this to build and run queries.
pub mod prelude {
    pub use fluent_query_core::{
        Backend, CacheConfig, CachedQuery, ColumnSet, ConditionBuilder, ConditionOperator,
        FilterBuilder, FluentQueryConfig, FluentQueryError, FromRecord, JoinOperator, LinkBuilder,
        LogicalOperator, MemoryCache, OrderBuilder, OrderType, PageResult, PagingInfo,
        PagingInfoBuilder, QueryBuilder, QueryCache, QueryDefaults, QueryExpression, QueryExt,
        Record, deserialize_record,
    };
}
