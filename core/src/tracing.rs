//! Tracing utilities for query execution and cache observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level event for one backend page call.
///
/// ```ignore
/// fluent_trace_page!(&query.entity_name, page_number, result.more_records, result.records.len());
/// ```
macro_rules! fluent_trace_page {
    ($entity:expr, $page:expr, $more:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            entity = %$entity,
            page = $page,
            more_records = $more,
            records = $count,
            "fluent_query.page"
        );
    };
}

/// Emit an info-level event when a full scan finishes.
macro_rules! fluent_trace_scan {
    ($entity:expr, $pages:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(entity = %$entity, pages = $pages, records = $count, "fluent_query.scan");
    };
}

/// Emit a debug-level event for cache lifecycle (hit, miss, store).
///
/// ```ignore
/// fluent_trace_cache!("hit", &key);
/// ```
macro_rules! fluent_trace_cache {
    ($event:literal, $key:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(event = $event, key = %$key, "fluent_query.cache");
    };
}
