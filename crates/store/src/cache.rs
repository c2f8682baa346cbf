//! The record store
//!
//! `Cache` maps string keys to records and optionally owns a full-text
//! index over the records' marked fields. Every public method is a thin
//! lock wrapper around a lock-free private counterpart on `CacheState`,
//! so compound operations (init, bulk load) can compose the private
//! parts under one lock acquisition.
//!
//! The store is insert-only per key: `set` refuses to overwrite, callers
//! delete first. This keeps the index update path a pure insertion and
//! makes store/index divergence impossible even on failed writes.

use lexi_core::{Error, Record, Result};
use lexi_index::FullTextIndex;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// In-memory record store with an optional full-text index attachment
#[derive(Debug, Default)]
pub struct Cache {
    pub(crate) inner: RwLock<CacheState>,
}

/// Everything the lock guards: the records and the index move together
#[derive(Debug, Default)]
pub(crate) struct CacheState {
    pub(crate) records: FxHashMap<String, Record>,
    pub(crate) full_text: Option<FullTextIndex>,
}

impl Cache {
    /// Create an empty store with no full-text index attached
    pub fn new() -> Self {
        Cache::default()
    }

    /// Store a record under a new key.
    ///
    /// Fails with [`Error::KeyExists`] if the key is already present
    /// (delete first to replace) and with a capacity error if the
    /// full-text insert breaches a budget, in which case neither the
    /// store nor the index is changed.
    pub fn set(&self, key: &str, record: Record) -> Result<()> {
        self.inner.write().set(key, record)
    }

    /// Record stored under `key`, with full-text markers unwrapped to
    /// plain strings. Absent keys yield `None`, never an error.
    pub fn get(&self, key: &str) -> Option<Record> {
        self.inner.read().records.get(key).map(Record::normalized)
    }

    /// Whether a record is stored under `key`
    pub fn exists(&self, key: &str) -> bool {
        self.inner.read().records.contains_key(key)
    }

    /// All keys, in arbitrary order
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().records.keys().cloned().collect()
    }

    /// All records, normalized, in arbitrary order
    pub fn values(&self) -> Vec<Record> {
        self.inner
            .read()
            .records
            .values()
            .map(Record::normalized)
            .collect()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Delete a record from the store and from the index (if attached).
    /// Deleting an absent key is a no-op, not an error.
    pub fn delete(&self, key: &str) {
        self.inner.write().delete(key);
    }

    /// Discard every record and all index contents together. The index
    /// stays attached with its budgets unchanged.
    pub fn clean(&self) {
        self.inner.write().clean();
    }
}

impl CacheState {
    fn set(&mut self, key: &str, record: Record) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        if self.records.contains_key(key) {
            return Err(Error::KeyExists(key.to_string()));
        }
        // Index first: a budget breach must abort before the record is
        // stored, and the staged engine insert cannot leave the index
        // half-written.
        if let Some(index) = self.full_text.as_mut() {
            index.insert([(key, &record)])?;
        }
        self.records.insert(key.to_string(), record);
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        if let Some(index) = self.full_text.as_mut() {
            index.remove(key);
        }
        self.records.remove(key);
    }

    fn clean(&mut self) {
        if let Some(index) = self.full_text.as_mut() {
            index.clear();
        }
        self.records.clear();
    }
}
