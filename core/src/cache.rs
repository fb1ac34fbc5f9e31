//! Expiring key-value stores for retrieved record sets.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::error::Result;
use crate::record::Record;

/// A store the caching decorator reads from and writes to.
///
/// Implementations are shared between builders and must synchronize
/// internally. Expiry is theirs to enforce.
pub trait QueryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>>;
    fn set(&self, key: &str, records: Vec<Record>, expires_at: DateTime<Utc>) -> Result<()>;
}

impl<C: QueryCache + ?Sized> QueryCache for std::sync::Arc<C> {
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, records: Vec<Record>, expires_at: DateTime<Utc>) -> Result<()> {
        (**self).set(key, records, expires_at)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Vec<Record>,
    expires_at: DateTime<Utc>,
}

/// In-process cache; an entry is evicted by the first lookup past its expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drops every entry that is expired at `now`, returning how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Vec<Record>> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > now => return Some(entry.records.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        None
    }
}

impl QueryCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>> {
        Ok(self.get_at(key, Utc::now()))
    }

    fn set(&self, key: &str, records: Vec<Record>, expires_at: DateTime<Utc>) -> Result<()> {
        self.entries.lock().insert(
            key.to_string(),
            CacheEntry {
                records,
                expires_at,
            },
        );
        Ok(())
    }
}
