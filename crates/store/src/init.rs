//! Full-text index lifecycle on the store
//!
//! Attaching the index is a writer operation: it indexes every record
//! already in the store (their marked fields are preserved internally
//! for exactly this moment) and only then becomes visible to readers.
//! A failed attachment leaves the store with no index at all; nothing
//! is ever partially attached.

use crate::cache::Cache;
use crate::loader;
use lexi_core::{Error, IndexLimits, Record, Result};
use lexi_index::FullTextIndex;
use rustc_hash::FxHashSet;
use std::path::Path;

impl Cache {
    /// Attach a full-text index, indexing every record already stored.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if an index is attached,
    /// or with a capacity error if the existing records breach a budget
    /// (the store is then left without an index).
    pub fn init_full_text(&self, limits: IndexLimits) -> Result<()> {
        let mut state = self.inner.write();
        if state.full_text.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let mut index = FullTextIndex::new(limits);
        index.insert(state.records.iter().map(|(k, r)| (k.as_str(), r)))?;
        tracing::info!(
            words = index.word_count(),
            records = state.records.len(),
            "full-text index initialized"
        );
        state.full_text = Some(index);
        Ok(())
    }

    /// Attach a full-text index and bulk-load `records` at the same time.
    ///
    /// Every loaded key must be new to the store; on any error (key
    /// collision, budget breach) neither the records nor the index are
    /// applied.
    pub fn init_full_text_with_records<I>(&self, records: I, limits: IndexLimits) -> Result<()>
    where
        I: IntoIterator<Item = (String, Record)>,
    {
        let records: Vec<(String, Record)> = records.into_iter().collect();

        let mut state = self.inner.write();
        if state.full_text.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let mut fresh: FxHashSet<&str> = FxHashSet::default();
        for (key, _) in &records {
            if key.is_empty() {
                return Err(Error::InvalidKey);
            }
            if state.records.contains_key(key) || !fresh.insert(key.as_str()) {
                return Err(Error::KeyExists(key.clone()));
            }
        }

        let mut index = FullTextIndex::new(limits);
        index.insert(
            state
                .records
                .iter()
                .map(|(k, r)| (k.as_str(), r))
                .chain(records.iter().map(|(k, r)| (k.as_str(), r))),
        )?;
        tracing::info!(
            words = index.word_count(),
            records = state.records.len() + records.len(),
            "full-text index initialized with bulk load"
        );

        for (key, record) in records {
            state.records.insert(key, record);
        }
        state.full_text = Some(index);
        Ok(())
    }

    /// Attach a full-text index, bulk-loading records from a JSON file
    /// shaped as one object of key → record.
    pub fn init_full_text_from_json(
        &self,
        path: impl AsRef<Path>,
        limits: IndexLimits,
    ) -> Result<()> {
        let records = loader::read_records(path)?;
        self.init_full_text_with_records(records, limits)
    }

    /// Whether a full-text index is attached
    pub fn ft_is_initialized(&self) -> bool {
        self.inner.read().full_text.is_some()
    }

    /// Discard the index contents (vocabulary and addresses). The index
    /// stays attached, budgets unchanged; stored records are untouched.
    pub fn ft_clean(&self) -> Result<()> {
        let mut state = self.inner.write();
        let index = state.full_text.as_mut().ok_or(Error::NotInitialized)?;
        index.clear();
        Ok(())
    }

    /// Compact the index address space (see
    /// [`FullTextIndex::sequence_indices`]). Search results are
    /// identical before and after.
    pub fn ft_sequence_indices(&self) -> Result<()> {
        let mut state = self.inner.write();
        let index = state.full_text.as_mut().ok_or(Error::NotInitialized)?;
        index.sequence_indices();
        Ok(())
    }

    /// Number of distinct word tokens in the index vocabulary
    pub fn ft_word_count(&self) -> Result<usize> {
        let state = self.inner.read();
        let index = state.full_text.as_ref().ok_or(Error::NotInitialized)?;
        Ok(index.word_count())
    }

    /// Estimated serialized size of the posting store in bytes
    pub fn ft_size_bytes(&self) -> Result<u64> {
        let state = self.inner.read();
        let index = state.full_text.as_ref().ok_or(Error::NotInitialized)?;
        index.size_bytes()
    }

    /// Change the index word-count budget; fails if the live vocabulary
    /// already exceeds the new ceiling
    pub fn ft_set_max_words(&self, max_words: usize) -> Result<()> {
        let mut state = self.inner.write();
        let index = state.full_text.as_mut().ok_or(Error::NotInitialized)?;
        index.set_max_words(max_words)
    }

    /// Change the index byte-size budget; fails if the live posting
    /// store is already larger than the new ceiling
    pub fn ft_set_max_bytes(&self, max_bytes: u64) -> Result<()> {
        let mut state = self.inner.write();
        let index = state.full_text.as_mut().ok_or(Error::NotInitialized)?;
        index.set_max_bytes(max_bytes)
    }
}
