//! Cross-crate integration tests
//!
//! Exercises the public lexidb surface end-to-end: store lifecycle,
//! the search algorithm family, budget enforcement, compaction, the
//! JSON loader, and the reader/writer concurrency guard.

mod common;

mod fulltext;
mod search;
mod store;
