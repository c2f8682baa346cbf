//! lexidb - Embeddable in-memory key-value store with full-text search
//!
//! lexidb holds records (field → value maps) entirely in memory and can
//! attach an inverted index over explicitly marked string fields, giving
//! fast word and substring search without a separate search service.
//!
//! # Quick Start
//!
//! ```
//! use lexidb::{Cache, FieldValue, IndexLimits, Record};
//!
//! let cache = Cache::new();
//! cache.set(
//!     "id1",
//!     Record::new()
//!         .with("name", FieldValue::indexed("tristan"))
//!         .with("age", FieldValue::scalar(17i64)),
//! )?;
//!
//! cache.init_full_text(IndexLimits::default().with_min_word_len(3))?;
//!
//! let hits = cache.search_one_word("tristan", 10, true)?;
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), lexidb::Error>(())
//! ```
//!
//! # Architecture
//!
//! The store ([`Cache`]) owns the records and, optionally, the indexing
//! engine ([`FullTextIndex`]); one reader/writer lock guards both so the
//! index and the records can never diverge. The engine stages every
//! insertion on a working copy and commits it whole, which is what makes
//! budget breaches safe: a failed write leaves no trace.

// Re-export the public API from the member crates
pub use lexi_core::{Error, FieldValue, IndexLimits, Record, Result, Value};
pub use lexi_index::{normalize, tokenize, Address, FullTextIndex, Posting, Tokens};
pub use lexi_store::{read_records, Cache};
