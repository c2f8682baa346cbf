//! Search operation surface
//!
//! Four algorithms with different cost/precision trade-offs:
//!
//! - strict one-word: exact vocabulary lookup, O(1) into the index
//! - non-strict one-word: linear vocabulary scan matching the query as a
//!   substring of each token, O(vocabulary x posting length); the
//!   index budgets keep this acceptable
//! - multi-word: narrows through the smallest candidate posting list,
//!   then filters by containment of the whole query
//! - scoped scans: brute force over record fields, bypassing the index
//!   entirely (they work with no index attached)
//!
//! All searches run under the read lock against the last committed
//! state. Absence (unknown word, no match) is an empty result, not an
//! error.

use crate::cache::{Cache, CacheState};
use lexi_core::{Error, FieldValue, Record, Result};
use lexi_index::{Address, FullTextIndex, Posting};
use rustc_hash::FxHashSet;

impl Cache {
    /// Single-word search.
    ///
    /// The query is lowercased but never tokenized: it is matched as one
    /// word. With `strict` set, only the exact vocabulary token matches;
    /// otherwise every token containing the query as a substring
    /// contributes its records.
    pub fn search_one_word(&self, query: &str, limit: usize, strict: bool) -> Result<Vec<Record>> {
        validate(query, limit)?;
        let state = self.inner.read();
        let index = state.full_text.as_ref().ok_or(Error::NotInitialized)?;
        Ok(state.search_one_word(index, query, limit, strict))
    }

    /// Whitespace-separated multi-word search.
    ///
    /// A single-word query delegates to
    /// [`search_one_word`](Cache::search_one_word) (where `strict`
    /// applies). With two or more words the candidate set is the
    /// smallest posting list among the first and the interior words
    /// (the last word is never consulted), and a candidate record is
    /// kept only if one of its field values contains the entire query.
    /// This narrows the scan; it is not an AND across all words.
    pub fn search(&self, query: &str, limit: usize, strict: bool) -> Result<Vec<Record>> {
        validate(query, limit)?;
        let state = self.inner.read();
        let index = state.full_text.as_ref().ok_or(Error::NotInitialized)?;

        let query = query.trim().to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(Error::InvalidQuery),
            [word] => Ok(state.search_one_word(index, word, limit, strict)),
            _ => Ok(state.search_multi_word(index, &query, &words, limit)),
        }
    }

    /// Brute-force scan of every record, restricted to the `fields`
    /// allow-list. Bypasses the index and works with none attached. An
    /// empty allow-list permits nothing and yields no results.
    pub fn search_values(&self, query: &str, limit: usize, fields: &[&str]) -> Result<Vec<Record>> {
        validate(query, limit)?;
        let state = self.inner.read();
        Ok(state.search_values(&query.to_lowercase(), limit, fields))
    }

    /// Brute-force scan of one named field across every record.
    /// Bypasses the index and works with none attached.
    pub fn search_with_key(&self, query: &str, field: &str, limit: usize) -> Result<Vec<Record>> {
        if field.is_empty() {
            return Err(Error::InvalidField);
        }
        validate(query, limit)?;
        let state = self.inner.read();
        Ok(state.search_with_key(&query.to_lowercase(), field, limit))
    }
}

fn validate(query: &str, limit: usize) -> Result<()> {
    if query.is_empty() {
        return Err(Error::InvalidQuery);
    }
    if limit < 1 {
        return Err(Error::InvalidLimit(limit));
    }
    Ok(())
}

impl CacheState {
    /// Resolve an address through the index's table to a normalized record
    fn resolve(&self, index: &FullTextIndex, address: Address) -> Option<Record> {
        let key = index.key_of(address)?;
        Some(self.records.get(key)?.normalized())
    }

    fn search_one_word(
        &self,
        index: &FullTextIndex,
        query: &str,
        limit: usize,
        strict: bool,
    ) -> Vec<Record> {
        let query = query.to_lowercase();
        let mut results = Vec::new();

        if strict {
            if let Some(posting) = index.lookup(&query) {
                for &address in posting.as_slice() {
                    if results.len() >= limit {
                        break;
                    }
                    results.extend(self.resolve(index, address));
                }
            }
            return results;
        }

        // Substring scan over the vocabulary. One address can back many
        // matching tokens, so emitted addresses are tracked in a seen set.
        let mut seen: FxHashSet<Address> = FxHashSet::default();
        for (token, posting) in index.vocabulary() {
            if results.len() >= limit {
                break;
            }
            if !token.contains(&query) {
                continue;
            }
            for &address in posting.as_slice() {
                if results.len() >= limit {
                    break;
                }
                if !seen.insert(address) {
                    continue;
                }
                results.extend(self.resolve(index, address));
            }
        }
        results
    }

    fn search_multi_word(
        &self,
        index: &FullTextIndex,
        query: &str,
        words: &[&str],
        limit: usize,
    ) -> Vec<Record> {
        // The first word anchors the search: absent means empty result.
        let Some(first) = index.lookup(words[0]) else {
            return Vec::new();
        };

        // Candidate posting is the smallest among the first and interior
        // words; the last word is intentionally never consulted.
        let mut smallest = (words[0], first.len());
        for &word in &words[1..words.len() - 1] {
            match index.lookup(word) {
                // An interior word unique to one record pins the result
                Some(&Posting::Single(address)) => {
                    return self.resolve(index, address).into_iter().collect();
                }
                Some(posting) if posting.len() < smallest.1 => {
                    smallest = (word, posting.len());
                }
                _ => {}
            }
        }

        let Some(candidates) = index.lookup(smallest.0) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        for &address in candidates.as_slice() {
            if results.len() >= limit {
                break;
            }
            let Some(key) = index.key_of(address) else {
                continue;
            };
            let Some(record) = self.records.get(key) else {
                continue;
            };
            let matches = record
                .fields()
                .any(|(_, value)| contains_query(value, query));
            if matches {
                results.push(record.normalized());
            }
        }
        results
    }

    fn search_values(&self, query: &str, limit: usize, fields: &[&str]) -> Vec<Record> {
        let mut results = Vec::new();
        for record in self.records.values() {
            if results.len() >= limit {
                break;
            }
            let matched = record.fields().any(|(name, value)| {
                fields.contains(&name) && contains_query(value, query)
            });
            if matched {
                results.push(record.normalized());
            }
        }
        results
    }

    fn search_with_key(&self, query: &str, field: &str, limit: usize) -> Vec<Record> {
        let mut results = Vec::new();
        for record in self.records.values() {
            if results.len() >= limit {
                break;
            }
            let matched = record
                .get(field)
                .is_some_and(|value| contains_query(value, query));
            if matched {
                results.push(record.normalized());
            }
        }
        results
    }
}

/// Lowercased substring match against a field's visible text
fn contains_query(value: &FieldValue, query: &str) -> bool {
    value
        .text()
        .is_some_and(|text| text.to_lowercase().contains(query))
}
