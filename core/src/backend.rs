//! The data-retrieval seam.

use crate::builder::QueryBuilder;
use crate::config::QueryDefaults;
use crate::error::Result;
use crate::expression::QueryExpression;
use crate::record::{FromRecord, Record};

/// One page of results as reported by a backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageResult {
    pub records: Vec<Record>,
    /// True when another page is available after this one
    pub more_records: bool,
    /// Token to pass back when requesting the next page
    pub paging_cookie: Option<String>,
    /// Total number of matching records, when requested and known
    pub total_record_count: Option<u64>,
}

/// Executes query expressions against a data store.
///
/// Implementations own everything about the store: protocol, authentication
/// and schema enforcement. A malformed expression is the backend's to reject.
pub trait Backend {
    fn execute_page(&self, query: &QueryExpression) -> Result<PageResult>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn execute_page(&self, query: &QueryExpression) -> Result<PageResult> {
        (**self).execute_page(query)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn execute_page(&self, query: &QueryExpression) -> Result<PageResult> {
        (**self).execute_page(query)
    }
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn execute_page(&self, query: &QueryExpression) -> Result<PageResult> {
        (**self).execute_page(query)
    }
}

/// Entry points for starting a query from any backend.
pub trait QueryExt: Backend {
    /// Starts an untyped query over `entity_name`.
    fn query(&self, entity_name: &str) -> QueryBuilder<'_, Self, Record> {
        QueryBuilder::new(entity_name, self)
    }

    /// Starts a query whose records are converted into `T`.
    fn query_as<T: FromRecord>(&self, entity_name: &str) -> QueryBuilder<'_, Self, T> {
        QueryBuilder::new(entity_name, self)
    }

    /// Starts an untyped query with configured defaults applied.
    fn query_with(&self, entity_name: &str, defaults: &QueryDefaults) -> QueryBuilder<'_, Self, Record> {
        QueryBuilder::with_defaults(entity_name, self, defaults)
    }
}

impl<B: Backend + ?Sized> QueryExt for B {}
