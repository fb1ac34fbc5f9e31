//! Shared fakes for the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use fluent_query::memory::InMemoryBackend;
use fluent_query::prelude::*;
use uuid::Uuid;

pub const ADVENTURE_WORKS: &str = "Adventure Works";
pub const CONTOSO: &str = "Contoso";

/// Two accounts, "Adventure Works" and "Contoso".
pub fn account_backend() -> InMemoryBackend {
    InMemoryBackend::with_records([
        Record::new("account")
            .with_id(Uuid::new_v4())
            .with_attribute("name", ADVENTURE_WORKS)
            .with_attribute("address1_line1", "Somewhere over the rainbow"),
        Record::new("account")
            .with_id(Uuid::new_v4())
            .with_attribute("name", CONTOSO)
            .with_attribute("address1_line1", "One Microsoft Way"),
    ])
}

/// Counts calls and forwards them to an inner backend.
pub struct CountingBackend<B> {
    pub inner: B,
    calls: AtomicUsize,
}

impl<B: Backend> CountingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<B: Backend> Backend for CountingBackend<B> {
    fn execute_page(&self, query: &QueryExpression) -> fluent_query::Result<PageResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.execute_page(query)
    }
}

/// Paging parameters seen by the backend on one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeenPage {
    pub page_number: u32,
    pub paging_cookie: Option<String>,
}

/// Replays a fixed list of page responses, one per call, recording the
/// paging parameters of every request.
pub struct ScriptedBackend {
    responses: RefCell<Vec<fluent_query::Result<PageResult>>>,
    seen: RefCell<Vec<SeenPage>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<fluent_query::Result<PageResult>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenPage> {
        self.seen.borrow().clone()
    }
}

impl Backend for ScriptedBackend {
    fn execute_page(&self, query: &QueryExpression) -> fluent_query::Result<PageResult> {
        self.seen.borrow_mut().push(SeenPage {
            page_number: query.page_info.page_number,
            paging_cookie: query.page_info.paging_cookie.clone(),
        });
        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(FluentQueryError::backend("no scripted response left")))
    }
}

/// A page holding one account per name.
pub fn page(names: &[&str], more_records: bool, cookie: Option<&str>) -> PageResult {
    PageResult {
        records: names
            .iter()
            .map(|name| Record::new("account").with_attribute("name", *name))
            .collect(),
        more_records,
        paging_cookie: cookie.map(str::to_string),
        total_record_count: None,
    }
}

pub fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get_as::<String>("name").unwrap().unwrap_or_default())
        .collect()
}

/// A cache whose store is unreachable.
pub struct UnavailableCache;

impl QueryCache for UnavailableCache {
    fn get(&self, _key: &str) -> fluent_query::Result<Option<Vec<Record>>> {
        Err(FluentQueryError::cache("connection refused"))
    }

    fn set(
        &self,
        _key: &str,
        _records: Vec<Record>,
        _expires_at: DateTime<Utc>,
    ) -> fluent_query::Result<()> {
        Err(FluentQueryError::cache("connection refused"))
    }
}
