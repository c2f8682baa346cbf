//! Full-text inverted index for lexidb
//!
//! This crate provides:
//! - a pure tokenizer/normalizer ([`tokenize`], [`normalize`])
//! - the memory-compact posting variant ([`Posting`])
//! - the bidirectional address table ([`AddressTable`])
//! - the indexing engine with budgeted, staged insertion
//!   ([`FullTextIndex`])
//!
//! The engine never touches live state while an insertion can still
//! fail: all mutation happens on an owned working copy that is merged
//! in one move on success, so a budget breach leaves the live index
//! byte-for-byte unchanged.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod engine;
pub mod posting;
pub mod tokenizer;

pub use address::AddressTable;
pub use engine::FullTextIndex;
pub use posting::{Address, Posting, Removal};
pub use tokenizer::{normalize, tokenize, Tokens};
