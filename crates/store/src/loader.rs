//! JSON record loader
//!
//! The wire format is one JSON object mapping key → record; record
//! fields are plain JSON values, with marked fields carried as the
//! `{"$lexi.indexed": true, "$lexi.value": "<text>"}` object.

use crate::cache::Cache;
use lexi_core::{Error, Record, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Read a key → record mapping from a JSON file
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<(String, Record)>> {
    let data = fs::read_to_string(path)?;
    let records: FxHashMap<String, Record> =
        serde_json::from_str(&data).map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(records.into_iter().collect())
}

impl Cache {
    /// Build a store from a JSON file of key → record, with no
    /// full-text index attached
    pub fn load_json(path: impl AsRef<Path>) -> Result<Cache> {
        let cache = Cache::new();
        for (key, record) in read_records(path)? {
            cache.set(&key, record)?;
        }
        Ok(cache)
    }
}
