//! Store lifecycle: round trip, insert-only discipline, deletion,
//! cleaning, and the JSON loader

use crate::common::*;
use lexidb::{Cache, Error, FieldValue, IndexLimits, Record, Value};
use std::io::Write;

#[test]
fn roundtrip_normalizes_markers() {
    let cache = Cache::new();
    cache.set("id1", person("tristan", 17)).unwrap();

    // Get returns the record with the marker unwrapped to a plain string
    let record = cache.get("id1").unwrap();
    assert_eq!(
        record.get("name"),
        Some(&FieldValue::Scalar(Value::String("tristan".into())))
    );
    assert_eq!(record.get("age"), Some(&FieldValue::Scalar(Value::Int(17))));
}

#[test]
fn set_twice_fails_and_keeps_first_record() {
    let cache = Cache::new();
    cache.set("id1", person("first", 1)).unwrap();

    assert!(matches!(
        cache.set("id1", person("second", 2)),
        Err(Error::KeyExists(_))
    ));
    let record = cache.get("id1").unwrap();
    assert_eq!(record.get("name").and_then(FieldValue::text), Some("first"));
}

#[test]
fn delete_then_reset_is_allowed() {
    let cache = Cache::new();
    cache.set("id1", person("first", 1)).unwrap();
    cache.delete("id1");
    cache.set("id1", person("second", 2)).unwrap();

    let record = cache.get("id1").unwrap();
    assert_eq!(
        record.get("name").and_then(FieldValue::text),
        Some("second")
    );
}

#[test]
fn delete_is_idempotent() {
    let cache = Cache::new();
    cache.set("id1", person("x", 1)).unwrap();

    cache.delete("id1");
    assert!(!cache.exists("id1"));
    cache.delete("id1");
    assert!(!cache.exists("id1"));
}

#[test]
fn clean_clears_store_and_index_together() {
    let cache = Cache::new();
    cache.set("id1", person("tristan", 17)).unwrap();
    cache.init_full_text(IndexLimits::default()).unwrap();

    cache.clean();

    assert!(cache.is_empty());
    // The index is still attached, just empty
    assert!(cache.ft_is_initialized());
    assert_eq!(cache.ft_word_count().unwrap(), 0);
    assert!(cache
        .search_one_word("tristan", 10, true)
        .unwrap()
        .is_empty());
}

#[test]
fn scenario_insert_init_search_delete() {
    // Insert, attach full text with min word length 3, search, delete.
    let cache = Cache::new();
    cache.set("id1", person("tristan", 17)).unwrap();
    cache
        .init_full_text(IndexLimits::default().with_min_word_len(3))
        .unwrap();

    let hits = cache.search_one_word("tristan", 10, true).unwrap();
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.get("name").and_then(FieldValue::text), Some("tristan"));
    assert_eq!(hit.get("age"), Some(&FieldValue::Scalar(Value::Int(17))));

    cache.delete("id1");
    let hits = cache.search_one_word("tristan", 10, true).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn json_loader_end_to_end() {
    let content = serde_json::json!({
        "id1": {
            "name": {"$lexi.indexed": true, "$lexi.value": "tristan"},
            "age": 17
        },
        "id2": {
            "name": {"$lexi.indexed": true, "$lexi.value": "morgan"},
            "age": 22
        }
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.to_string().as_bytes()).unwrap();

    let cache = Cache::new();
    cache
        .init_full_text_from_json(file.path(), IndexLimits::default())
        .unwrap();

    assert_eq!(cache.len(), 2);
    let hits = cache.search_one_word("morgan", 10, true).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].get("age"),
        Some(&FieldValue::Scalar(Value::Int(22)))
    );
}

#[test]
fn unmarked_string_fields_are_not_indexed() {
    let cache = Cache::new();
    cache
        .set(
            "id1",
            Record::new().with("note", FieldValue::scalar("plain text")),
        )
        .unwrap();
    cache.init_full_text(IndexLimits::default()).unwrap();

    // Invisible to the index...
    assert!(cache.search_one_word("plain", 10, true).unwrap().is_empty());
    // ...but reachable by the scoped scans
    let hits = cache.search_values("plain", 10, &["note"]).unwrap();
    assert_eq!(hits.len(), 1);
    let hits = cache.search_with_key("plain", "note", 10).unwrap();
    assert_eq!(hits.len(), 1);
}
