//! Tokenizer and normalizer
//!
//! Pure functions with no shared state. The pipeline, in order:
//! trim outer whitespace, collapse runs of spaces, lowercase, split on
//! spaces, strip leading/trailing non-alphanumerics from each piece,
//! split each piece into maximal runs of alphanumerics plus internal
//! `-`/`.` (compound tokens like `foo-bar` stay whole), and drop
//! sub-tokens shorter than the configured minimum length.
//!
//! Tokenization is deterministic and idempotent: feeding a produced
//! token back through the tokenizer yields the token itself.

use std::collections::VecDeque;

/// Trim, collapse internal runs of 2+ spaces to one, and lowercase
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.trim().chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
            out.push(' ');
        } else {
            prev_space = false;
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Tokenize `text` into candidate word tokens of at least `min_len`
/// characters. The returned iterator is lazy and finite.
pub fn tokenize(text: &str, min_len: usize) -> Tokens {
    Tokens {
        text: normalize(text),
        pos: 0,
        min_len,
        pending: VecDeque::new(),
    }
}

/// Lazy token stream produced by [`tokenize`]
#[derive(Debug, Clone)]
pub struct Tokens {
    text: String,
    pos: usize,
    min_len: usize,
    pending: VecDeque<String>,
}

impl Tokens {
    /// Break one space-delimited piece into sub-tokens.
    ///
    /// A sub-token is a maximal run of alphanumerics, `-`, and `.`,
    /// trimmed of non-alphanumerics at both ends so every produced
    /// token starts and ends alphanumeric.
    fn split_piece(&mut self, piece: &str) {
        for run in piece.split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '.')) {
            let token = run.trim_matches(|c: char| !c.is_alphanumeric());
            if !token.is_empty() && token.chars().count() >= self.min_len {
                self.pending.push_back(token.to_string());
            }
        }
    }
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            let rest = &self.text[self.pos..];
            let (piece, advance) = match rest.find(' ') {
                Some(at) => (&rest[..at], at + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;
            let piece = piece.to_string();
            self.split_piece(&piece);
        }
    }
}
