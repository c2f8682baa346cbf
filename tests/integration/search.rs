//! The search algorithm family over one shared corpus

use crate::common::*;
use lexidb::{Cache, Error, IndexLimits};

fn corpus() -> Cache {
    let cache = Cache::new();
    cache
        .set("d1", tagged("d1", "computer science fundamentals"))
        .unwrap();
    cache
        .set("d2", tagged("d2", "compiler construction notes"))
        .unwrap();
    cache
        .set("d3", tagged("d3", "science of cooking"))
        .unwrap();
    cache.init_full_text(IndexLimits::default()).unwrap();
    cache
}

#[test]
fn strict_vs_substring() {
    let cache = corpus();

    // Strict: whole token only
    let hits = cache.search_one_word("computer", 10, true).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1"]);
    assert!(cache.search_one_word("comp", 10, true).unwrap().is_empty());

    // Non-strict: substring of any token
    let hits = cache.search_one_word("comp", 10, false).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1", "d2"]);
}

#[test]
fn substring_search_dedupes_across_tokens() {
    let cache = corpus();

    // "c" hits many tokens of the same records; each record once
    let hits = cache.search_one_word("c", 10, false).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1", "d2", "d3"]);
}

#[test]
fn substring_search_honors_limit() {
    let cache = corpus();
    let hits = cache.search_one_word("c", 2, false).unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn multi_word_narrowing() {
    let cache = corpus();

    let hits = cache.search("computer science", 10, false).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1"]);

    // Words present in different records, phrase nowhere
    assert!(cache
        .search("computer cooking", 10, false)
        .unwrap()
        .is_empty());

    // First word unknown: empty, not an error
    assert!(cache.search("zzz science", 10, false).unwrap().is_empty());
}

#[test]
fn multi_word_interior_singleton_short_circuit() {
    let cache = corpus();

    // "cooking" is interior and unique to d3: the narrowing returns d3
    // directly, without the phrase containment check
    let hits = cache.search("science cooking zzz", 10, false).unwrap();
    assert_eq!(result_ids(&hits), vec!["d3"]);
}

#[test]
fn scoped_value_search() {
    let cache = corpus();

    let hits = cache.search_values("science", 10, &["text"]).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1", "d3"]);

    // "id" fields contain no "science"
    assert!(cache.search_values("science", 10, &["id"]).unwrap().is_empty());
    // Empty allow-list: nothing is searched
    assert!(cache.search_values("science", 10, &[]).unwrap().is_empty());
}

#[test]
fn scoped_key_search() {
    let cache = corpus();

    let hits = cache.search_with_key("notes", "text", 10).unwrap();
    assert_eq!(result_ids(&hits), vec!["d2"]);

    let hits = cache.search_with_key("d2", "id", 10).unwrap();
    assert_eq!(result_ids(&hits), vec!["d2"]);
}

#[test]
fn error_surface() {
    let cache = corpus();

    assert!(matches!(
        cache.search_one_word("", 10, false),
        Err(Error::InvalidQuery)
    ));
    assert!(matches!(
        cache.search("query words", 0, false),
        Err(Error::InvalidLimit(0))
    ));
    assert!(matches!(
        cache.search_values("", 10, &["text"]),
        Err(Error::InvalidQuery)
    ));
    assert!(matches!(
        cache.search_with_key("query", "", 10),
        Err(Error::InvalidField)
    ));

    let bare = Cache::new();
    assert!(matches!(
        bare.search_one_word("word", 10, false),
        Err(Error::NotInitialized)
    ));
    // Scoped scans never need the index
    assert!(bare.search_values("word", 10, &["text"]).unwrap().is_empty());
    assert!(bare.search_with_key("word", "text", 10).unwrap().is_empty());
}
