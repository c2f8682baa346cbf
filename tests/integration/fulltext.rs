//! Budget enforcement and index compaction

use crate::common::*;
use lexidb::{Cache, IndexLimits};
use proptest::prelude::*;

#[test]
fn word_budget_rejects_and_leaves_state_unchanged() {
    let cache = Cache::new();
    cache
        .init_full_text(IndexLimits::default().with_max_words(3))
        .unwrap();

    // Four distinct eligible tokens against a budget of three
    let err = cache
        .set("d1", tagged("d1", "one two three four"))
        .unwrap_err();
    assert!(err.is_capacity());

    // The record was not stored and none of the tokens are searchable
    assert!(!cache.exists("d1"));
    assert_eq!(cache.ft_word_count().unwrap(), 0);
    for word in ["one", "two", "three", "four"] {
        assert!(cache.search_one_word(word, 10, true).unwrap().is_empty());
    }
}

#[test]
fn word_budget_allows_exact_fit_and_repeats() {
    let cache = Cache::new();
    cache
        .init_full_text(IndexLimits::default().with_max_words(3))
        .unwrap();

    cache.set("d1", tagged("d1", "one two three")).unwrap();
    // Repeated words cost no new vocabulary
    cache.set("d2", tagged("d2", "one two")).unwrap();

    assert_eq!(cache.ft_word_count().unwrap(), 3);
    let hits = cache.search_one_word("one", 10, true).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1", "d2"]);
}

#[test]
fn byte_budget_rejects_oversized_insert() {
    let cache = Cache::new();
    cache
        .init_full_text(IndexLimits::default().with_max_bytes(16))
        .unwrap();

    let err = cache
        .set("d1", tagged("d1", "definitely too large"))
        .unwrap_err();
    assert!(err.is_capacity());
    assert!(!cache.exists("d1"));
    assert_eq!(cache.ft_word_count().unwrap(), 0);
}

#[test]
fn failed_insert_preserves_earlier_records() {
    let cache = Cache::new();
    cache
        .init_full_text(IndexLimits::default().with_max_words(2))
        .unwrap();
    cache.set("d1", tagged("d1", "first second")).unwrap();

    assert!(cache.set("d2", tagged("d2", "third")).is_err());

    // d1 and its index entries survive untouched
    assert!(cache.exists("d1"));
    assert!(!cache.exists("d2"));
    let hits = cache.search_one_word("first", 10, true).unwrap();
    assert_eq!(result_ids(&hits), vec!["d1"]);
}

#[test]
fn sequence_indices_after_deletes() {
    let cache = Cache::new();
    cache.init_full_text(IndexLimits::default()).unwrap();
    for i in 0..6 {
        cache
            .set(&format!("k{i}"), tagged(&format!("k{i}"), "shared word"))
            .unwrap();
    }
    for key in ["k0", "k2", "k4"] {
        cache.delete(key);
    }

    let before = cache.search_one_word("shared", 10, true).unwrap();
    cache.ft_sequence_indices().unwrap();
    let after = cache.search_one_word("shared", 10, true).unwrap();

    assert_eq!(result_ids(&before), vec!["k1", "k3", "k5"]);
    assert_eq!(result_ids(&before), result_ids(&after));
}

#[test]
fn index_stats_reflect_contents() {
    let cache = Cache::new();
    cache.init_full_text(IndexLimits::default()).unwrap();
    let empty_size = cache.ft_size_bytes().unwrap();

    cache.set("d1", tagged("d1", "alpha beta gamma")).unwrap();
    assert_eq!(cache.ft_word_count().unwrap(), 3);
    assert!(cache.ft_size_bytes().unwrap() > empty_size);
}

// ============================================================================
// Compaction property
// ============================================================================

const WORDS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

/// Replay a randomized set/delete sequence against an indexed cache
fn build(ops: &[(usize, bool)]) -> Cache {
    let cache = Cache::new();
    cache.init_full_text(IndexLimits::default()).unwrap();
    for (step, &(key_idx, is_set)) in ops.iter().enumerate() {
        let key = format!("k{key_idx}");
        if is_set {
            if !cache.exists(&key) {
                let text = format!(
                    "{} {}",
                    WORDS[key_idx % WORDS.len()],
                    WORDS[(key_idx + step) % WORDS.len()]
                );
                let record = tagged(&key, &text);
                cache.set(&key, record).unwrap();
            }
        } else {
            cache.delete(&key);
        }
    }
    cache
}

fn all_query_results(cache: &Cache) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    for word in WORDS {
        results.push(result_ids(
            &cache.search_one_word(word, 100, true).unwrap(),
        ));
        // Substring queries exercise the vocabulary scan path
        results.push(result_ids(
            &cache.search_one_word(&word[..3], 100, false).unwrap(),
        ));
    }
    results
}

proptest! {
    #[test]
    fn compaction_preserves_search_results(
        ops in proptest::collection::vec((0..8usize, any::<bool>()), 1..48)
    ) {
        let cache = build(&ops);

        let before = all_query_results(&cache);
        cache.ft_sequence_indices().unwrap();
        let after = all_query_results(&cache);

        prop_assert_eq!(&before, &after);

        // Compacting again is stable
        cache.ft_sequence_indices().unwrap();
        prop_assert_eq!(&after, &all_query_results(&cache));
    }
}
