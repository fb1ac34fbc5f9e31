use chrono::{DateTime, Utc};

use crate::backend::Backend;
use crate::cache::QueryCache;
use crate::error::Result;
use crate::fingerprint::{RetrievalMode, cache_key};
use crate::record::{FromRecord, Record};

use super::QueryBuilder;
use super::query::convert_records;

/// A [`QueryBuilder`] whose retrievals go through a [`QueryCache`].
///
/// Results are looked up under the expression's fingerprint. A hit performs
/// no backend call; a miss executes the query and stores the records with
/// the configured expiry. Two concurrent misses on the same key may both
/// reach the backend.
pub struct CachedQuery<'q, 'b, B: ?Sized, T, C: ?Sized> {
    query: &'q mut QueryBuilder<'b, B, T>,
    cache: &'q C,
    expires_at: DateTime<Utc>,
}

impl<'q, 'b, B, T, C> CachedQuery<'q, 'b, B, T, C>
where
    B: Backend + ?Sized,
    T: FromRecord,
    C: QueryCache + ?Sized,
{
    pub(crate) fn new(
        query: &'q mut QueryBuilder<'b, B, T>,
        cache: &'q C,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            query,
            cache,
            expires_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Cached [`QueryBuilder::retrieve`].
    pub fn retrieve(&self) -> Result<Vec<T>> {
        let key = cache_key(self.query.expression(), RetrievalMode::Page)?;
        if let Some(records) = self.lookup(&key)? {
            return convert_records(records);
        }

        let records = self.query.retrieve_records()?;
        self.store(&key, &records)?;
        convert_records(records)
    }

    /// Cached [`QueryBuilder::retrieve_all`].
    pub fn retrieve_all(&mut self) -> Result<Vec<T>> {
        let key = cache_key(self.query.expression(), RetrievalMode::All)?;
        if let Some(records) = self.lookup(&key)? {
            return convert_records(records);
        }

        let records = self.query.retrieve_all_records()?;
        self.store(&key, &records)?;
        convert_records(records)
    }

    fn lookup(&self, key: &str) -> Result<Option<Vec<Record>>> {
        let cached = self.cache.get(key)?;
        if cached.is_some() {
            fluent_trace_cache!("hit", key);
        } else {
            fluent_trace_cache!("miss", key);
        }
        Ok(cached)
    }

    fn store(&self, key: &str, records: &[Record]) -> Result<()> {
        self.cache.set(key, records.to_vec(), self.expires_at)?;
        fluent_trace_cache!("store", key);
        Ok(())
    }
}
