//! Configured budgets for the inverted index
//!
//! Budgets are checked on every insertion into the index. A breach rolls
//! the whole insertion back and surfaces a capacity error; the live index
//! is left untouched.

/// Budgets for the full-text index
///
/// Zero means unlimited for the two capacity budgets. `min_word_len` is
/// the shortest token the tokenizer will keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLimits {
    /// Maximum number of distinct word tokens (0 = unlimited)
    pub max_words: usize,

    /// Maximum estimated serialized size of the posting store in bytes
    /// (0 = unlimited)
    pub max_bytes: u64,

    /// Minimum accepted word length, in characters
    pub min_word_len: usize,
}

impl Default for IndexLimits {
    fn default() -> Self {
        IndexLimits {
            max_words: 0,
            max_bytes: 0,
            min_word_len: 2,
        }
    }
}

impl IndexLimits {
    /// Unlimited capacity budgets with the default minimum word length
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Set the word-count budget
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the byte-size budget
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the minimum accepted word length
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }
}
