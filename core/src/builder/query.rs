//! Root query builder.

use core::marker::PhantomData;

use chrono::{DateTime, Utc};

use crate::backend::Backend;
use crate::cache::QueryCache;
use crate::config::{CacheConfig, QueryDefaults};
use crate::error::{FluentQueryError, Result};
use crate::expression::{ColumnSet, FilterExpression, LogicalOperator, PagingInfo, QueryExpression};
use crate::record::{FromRecord, Record};

use super::{CachedQuery, FilterBuilder, LinkBuilder, OrderBuilder, PagingInfoBuilder};

/// Builds a [`QueryExpression`] and executes it against a backend.
///
/// `T` is the record type results are converted into; [`Record`] keeps the
/// attribute bag as returned by the backend.
pub struct QueryBuilder<'b, B: ?Sized, T = Record> {
    expression: QueryExpression,
    backend: &'b B,
    _record: PhantomData<fn() -> T>,
}

impl<'b, B: Backend + ?Sized, T: FromRecord> QueryBuilder<'b, B, T> {
    pub fn new(entity_name: impl Into<String>, backend: &'b B) -> Self {
        Self {
            expression: QueryExpression::new(entity_name),
            backend,
            _record: PhantomData,
        }
    }

    /// Creates a builder with locking and paging taken from `defaults`.
    pub fn with_defaults(
        entity_name: impl Into<String>,
        backend: &'b B,
        defaults: &QueryDefaults,
    ) -> Self {
        let mut builder = Self::new(entity_name, backend);
        builder.expression.no_lock = defaults.no_lock;
        builder.expression.page_info.count = defaults.page_size;
        builder.expression.page_info.return_total_record_count =
            defaults.return_total_record_count;
        builder
    }

    /// Adds attribute names to the requested columns.
    pub fn include_columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expression.column_set.add_columns(names);
        self
    }

    pub fn include_all_columns(&mut self) -> &mut Self {
        self.expression.column_set = ColumnSet::All;
        self
    }

    /// Sets the top-level filter, replacing any previous one.
    pub fn r#where<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut FilterBuilder),
    {
        self.expression.criteria = Some(FilterBuilder::build_with(build));
        self
    }

    /// Adds a filter that must hold in addition to the current top-level filter.
    ///
    /// Under an `And` root the new filter becomes its last nested filter. An
    /// `Or` root is first wrapped in a new `And` node so it keeps its meaning.
    pub fn add_filter<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut FilterBuilder),
    {
        let added = FilterBuilder::build_with(build);
        self.expression.criteria = Some(match self.expression.criteria.take() {
            None => added,
            Some(mut root) if root.filter_operator == LogicalOperator::And => {
                root.add_filter(added);
                root
            }
            Some(root) => {
                let mut wrapper = FilterExpression::new(LogicalOperator::And);
                wrapper.add_filter(root);
                wrapper.add_filter(added);
                wrapper
            }
        });
        self
    }

    /// Appends a link entity built by `build`.
    pub fn link<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut LinkBuilder),
    {
        self.expression
            .link_entities
            .push(LinkBuilder::build_with(build));
        self
    }

    /// Appends a sort key; keys apply in call order.
    pub fn order<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut OrderBuilder),
    {
        let mut order = OrderBuilder::new();
        build(&mut order);
        self.expression.orders.push(order.build());
        self
    }

    pub fn with(&mut self) -> QuerySettings<'_, 'b, B, T> {
        QuerySettings { query: self }
    }

    /// The expression as currently configured.
    pub fn expression(&self) -> &QueryExpression {
        &self.expression
    }

    pub fn into_expression(self) -> QueryExpression {
        self.expression
    }

    /// Caches results in `cache` until `expires_at`.
    pub fn use_cache<'q, C: QueryCache + ?Sized>(
        &'q mut self,
        cache: &'q C,
        expires_at: DateTime<Utc>,
    ) -> CachedQuery<'q, 'b, B, T, C> {
        CachedQuery::new(self, cache, expires_at)
    }

    /// Caches results in `cache` for the configured time-to-live.
    pub fn use_cache_for<'q, C: QueryCache + ?Sized>(
        &'q mut self,
        cache: &'q C,
        config: &CacheConfig,
    ) -> CachedQuery<'q, 'b, B, T, C> {
        let expires_at = config.expires_at(Utc::now());
        self.use_cache(cache, expires_at)
    }

    /// Executes one backend call with the current expression.
    pub fn retrieve(&self) -> Result<Vec<T>> {
        convert_records(self.retrieve_records()?)
    }

    /// Retrieves every page, starting at the configured page.
    ///
    /// The configured page number and cookie are restored afterwards, also
    /// when a page fails. On failure no partial result is returned.
    pub fn retrieve_all(&mut self) -> Result<Vec<T>> {
        convert_records(self.retrieve_all_records()?)
    }

    pub(crate) fn retrieve_records(&self) -> Result<Vec<Record>> {
        self.ensure_entity_name()?;
        let page = self.backend.execute_page(&self.expression)?;
        fluent_trace_page!(
            self.expression.entity_name,
            self.expression.page_info.page_number,
            page.more_records,
            page.records.len()
        );
        Ok(page.records)
    }

    pub(crate) fn retrieve_all_records(&mut self) -> Result<Vec<Record>> {
        self.ensure_entity_name()?;

        let previous_page_number = self.expression.page_info.page_number;
        let previous_paging_cookie = self.expression.page_info.paging_cookie.clone();

        let result = self.scan_pages();

        self.expression.page_info.page_number = previous_page_number;
        self.expression.page_info.paging_cookie = previous_paging_cookie;

        result
    }

    fn scan_pages(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self.backend.execute_page(&self.expression)?;
            pages += 1;
            fluent_trace_page!(
                self.expression.entity_name,
                self.expression.page_info.page_number,
                page.more_records,
                page.records.len()
            );

            records.extend(page.records);
            if !page.more_records {
                break;
            }

            let page_info = &mut self.expression.page_info;
            page_info.page_number = page_info.page_number.checked_add(1).ok_or_else(|| {
                FluentQueryError::backend("backend reported more records past the last page number")
            })?;
            page_info.paging_cookie = page.paging_cookie;
        }

        fluent_trace_scan!(self.expression.entity_name, pages, records.len());
        Ok(records)
    }

    fn ensure_entity_name(&self) -> Result<()> {
        if self.expression.entity_name.is_empty() {
            return Err(FluentQueryError::Misuse(
                "query executed without an entity name".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn convert_records<T: FromRecord>(records: Vec<Record>) -> Result<Vec<T>> {
    records.into_iter().map(T::from_record).collect()
}

/// Query-level settings. Each setting hands the builder back.
pub struct QuerySettings<'q, 'b, B: ?Sized, T> {
    query: &'q mut QueryBuilder<'b, B, T>,
}

impl<'q, 'b, B: Backend + ?Sized, T: FromRecord> QuerySettings<'q, 'b, B, T> {
    /// Caps the number of returned records; `None` removes the cap.
    pub fn record_count(self, top_count: Option<u32>) -> &'q mut QueryBuilder<'b, B, T> {
        self.query.expression.top_count = top_count;
        self.query
    }

    /// `true` takes row locks while reading.
    pub fn database_lock(self, use_lock: bool) -> &'q mut QueryBuilder<'b, B, T> {
        self.query.expression.no_lock = !use_lock;
        self.query
    }

    pub fn unique_records(self, unique: bool) -> &'q mut QueryBuilder<'b, B, T> {
        self.query.expression.distinct = unique;
        self.query
    }

    /// Replaces the paging info with one built by `build`.
    pub fn paging_info<F>(self, build: F) -> &'q mut QueryBuilder<'b, B, T>
    where
        F: FnOnce(&mut PagingInfoBuilder),
    {
        let mut paging = PagingInfoBuilder::new();
        build(&mut paging);
        self.query.expression.page_info = paging.build();
        self.query
    }

    /// Replaces the paging info with `page_info`.
    pub fn page_info(self, page_info: PagingInfo) -> &'q mut QueryBuilder<'b, B, T> {
        self.query.expression.page_info = page_info;
        self.query
    }

    /// Asks the backend for the total record count. The count is not part of
    /// the retrieved records, so `retrieve` and `retrieve_all` do not surface it.
    pub fn total_record_count(self, return_count: bool) -> &'q mut QueryBuilder<'b, B, T> {
        self.query.expression.page_info.return_total_record_count = return_count;
        self.query
    }
}
