//! Shared helpers for the integration suite

use lexidb::{FieldValue, Record};

/// Record with one indexed `name` field and one opaque `age` field
pub fn person(name: &str, age: i64) -> Record {
    Record::new()
        .with("name", FieldValue::indexed(name))
        .with("age", FieldValue::scalar(age))
}

/// Record with an opaque `id` field (for identifying search results)
/// and an indexed `text` field
pub fn tagged(id: &str, text: &str) -> Record {
    Record::new()
        .with("id", FieldValue::scalar(id))
        .with("text", FieldValue::indexed(text))
}

/// Sorted `id` field values of a result set
pub fn result_ids(records: &[Record]) -> Vec<String> {
    let mut ids: Vec<String> = records
        .iter()
        .filter_map(|r| r.get("id").and_then(FieldValue::text).map(String::from))
        .collect();
    ids.sort();
    ids
}
