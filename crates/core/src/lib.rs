//! Core types for lexidb
//!
//! This crate defines the data model shared by every layer:
//! - [`Value`]: opaque scalar payloads stored in records
//! - [`FieldValue`] / [`Record`]: the record model with the full-text marker
//! - [`IndexLimits`]: configured budgets for the inverted index
//! - [`Error`] / [`Result`]: error types for the whole workspace

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod value;

pub use error::{Error, Result};
pub use limits::IndexLimits;
pub use record::{FieldValue, Record};
pub use value::Value;
