//! Indexing engine: budgeted insertion, deletion, compaction
//!
//! [`FullTextIndex`] composes the tokenizer, the posting store, and the
//! address table. Insertion follows a staged-copy-then-commit
//! discipline: a [`StagedIndex`] working copy absorbs every mutation and
//! budget check, and only a fully successful batch is merged back,
//! atomically, by replacing the live maps. A failed batch is simply
//! dropped, so concurrent readers of the live index can never observe a
//! partially-applied insert.
//!
//! Budgets are checked per token: the word-count budget before a new
//! vocabulary entry is created, the byte budget after every token is
//! applied. An oversized insert therefore fails at the first excess
//! token, not at the end of the batch.

use crate::address::AddressTable;
use crate::posting::{Address, Posting, Removal};
use crate::tokenizer::tokenize;
use lexi_core::{Error, IndexLimits, Record, Result};
use rustc_hash::FxHashMap;

/// The full-text inverted index
#[derive(Debug, Clone)]
pub struct FullTextIndex {
    postings: FxHashMap<String, Posting>,
    table: AddressTable,
    limits: IndexLimits,
}

impl FullTextIndex {
    /// Create an empty index with the given budgets
    pub fn new(limits: IndexLimits) -> Self {
        FullTextIndex {
            postings: FxHashMap::default(),
            table: AddressTable::new(),
            limits,
        }
    }

    /// The configured budgets
    pub fn limits(&self) -> IndexLimits {
        self.limits
    }

    /// Number of distinct word tokens in the vocabulary
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of keys holding a live address
    pub fn record_count(&self) -> usize {
        self.table.len()
    }

    /// Estimated serialized size of the posting store in bytes
    pub fn size_bytes(&self) -> Result<u64> {
        estimate_size(&self.postings)
    }

    /// Posting for an exact word token
    pub fn lookup(&self, token: &str) -> Option<&Posting> {
        self.postings.get(token)
    }

    /// Iterate the whole vocabulary with its postings
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, &Posting)> {
        self.postings
            .iter()
            .map(|(token, posting)| (token.as_str(), posting))
    }

    /// Resolve an address back to its record key
    pub fn key_of(&self, address: Address) -> Option<&str> {
        self.table.key(address)
    }

    /// Exclusive upper bound of the address range, holes included.
    /// Equals [`record_count`](Self::record_count) right after a
    /// [`sequence_indices`](Self::sequence_indices) pass.
    pub fn address_span(&self) -> Address {
        self.table.next_address()
    }

    /// Index a batch of records, all or nothing.
    ///
    /// Every marked field of every record is tokenized and the record's
    /// address is added to each surviving token's posting list. On any
    /// budget breach the staged copy is discarded and the live index is
    /// left byte-for-byte unchanged.
    pub fn insert<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a Record)>,
    {
        let mut staged = StagedIndex::from_live(self);
        for (key, record) in records {
            staged.insert_record(key, record)?;
        }
        staged.commit(self);
        Ok(())
    }

    /// Remove a key's address from every posting list.
    ///
    /// Postings shrinking to one entry collapse to their single-address
    /// form; postings shrinking to zero disappear along with their word.
    /// A key the index never saw is a no-op.
    pub fn remove(&mut self, key: &str) {
        let Some(address) = self.table.remove(key) else {
            return;
        };
        self.postings
            .retain(|_, posting| !matches!(posting.remove(address), Removal::Emptied));
    }

    /// Compact the address space: reassign dense addresses `0..N` and
    /// rewrite every posting list through the old→new mapping.
    ///
    /// Deletions leave holes in the address range that grow without
    /// bound over the lifetime of a long-running store; this reclaims
    /// them. Search results are identical before and after.
    pub fn sequence_indices(&mut self) {
        let before = self.table.next_address();
        let mapping = self.table.rebuild_dense();
        for posting in self.postings.values_mut() {
            posting.map_addresses(|old| {
                debug_assert!(
                    mapping.contains_key(&old),
                    "posting address {old} missing from address table"
                );
                mapping.get(&old).copied().unwrap_or(old)
            });
        }
        tracing::debug!(
            before,
            after = self.table.next_address(),
            "resequenced full-text addresses"
        );
    }

    /// Discard the posting store and address table; budgets are kept
    pub fn clear(&mut self) {
        self.postings.clear();
        self.table.clear();
    }

    /// Change the word-count budget. Fails if the live vocabulary
    /// already exceeds the new ceiling.
    pub fn set_max_words(&mut self, max_words: usize) -> Result<()> {
        if max_words > 0 && self.postings.len() > max_words {
            return Err(Error::WordBudget {
                current: self.postings.len(),
                max: max_words,
            });
        }
        self.limits.max_words = max_words;
        Ok(())
    }

    /// Change the byte-size budget. Fails if the live posting store is
    /// already larger than the new ceiling.
    pub fn set_max_bytes(&mut self, max_bytes: u64) -> Result<()> {
        if max_bytes > 0 {
            let current = self.size_bytes()?;
            if current > max_bytes {
                return Err(Error::ByteBudget {
                    current,
                    max: max_bytes,
                });
            }
        }
        self.limits.max_bytes = max_bytes;
        Ok(())
    }
}

/// Estimated serialized size of a posting store
fn estimate_size(postings: &FxHashMap<String, Posting>) -> Result<u64> {
    bincode::serialized_size(postings).map_err(|e| Error::Serialization(e.to_string()))
}

// ============================================================================
// StagedIndex
// ============================================================================

/// Owned working copy of the index state for one insertion batch.
///
/// Mutations and budget checks run here; the live index is only touched
/// by [`commit`](StagedIndex::commit), which moves the finished maps
/// into place in one assignment each.
struct StagedIndex {
    postings: FxHashMap<String, Posting>,
    table: AddressTable,
    limits: IndexLimits,
}

impl StagedIndex {
    fn from_live(live: &FullTextIndex) -> Self {
        StagedIndex {
            postings: live.postings.clone(),
            table: live.table.clone(),
            limits: live.limits,
        }
    }

    fn commit(self, live: &mut FullTextIndex) {
        live.postings = self.postings;
        live.table = self.table;
    }

    fn insert_record(&mut self, key: &str, record: &Record) -> Result<()> {
        for (_, text) in record.indexed_fields() {
            for token in tokenize(text, self.limits.min_word_len) {
                self.insert_token(key, token)?;
            }
        }
        Ok(())
    }

    fn insert_token(&mut self, key: &str, token: String) -> Result<()> {
        let address = self.table.get_or_assign(key);
        if let Some(posting) = self.postings.get_mut(&token) {
            posting.insert(address);
        } else {
            self.check_word_budget()?;
            self.postings.insert(token, Posting::new(address));
        }
        self.check_byte_budget()
    }

    fn check_word_budget(&self) -> Result<()> {
        let max = self.limits.max_words;
        if max > 0 && self.postings.len() >= max {
            return Err(Error::WordBudget {
                current: self.postings.len(),
                max,
            });
        }
        Ok(())
    }

    fn check_byte_budget(&self) -> Result<()> {
        let max = self.limits.max_bytes;
        if max == 0 {
            return Ok(());
        }
        let current = estimate_size(&self.postings)?;
        if current > max {
            return Err(Error::ByteBudget { current, max });
        }
        Ok(())
    }
}
