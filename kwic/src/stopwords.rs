//! Stop-word filtering
//!
//! The filter is only active when at least one word was loaded. A missing or
//! empty stop-word file is not an error; exclusion is simply disabled for the run.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::normalize::normalize;

/// Set of normalized words that never become index keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An inactive filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from in-memory words, normalizing each one
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load stop words from a file. Unreadable files leave the filter inactive.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut stop_words = Self::new();

        match fs::read(path) {
            Ok(bytes) => {
                let loaded = stop_words.load(&String::from_utf8_lossy(&bytes));
                debug!(path = %path.display(), count = stop_words.len(), loaded, "Loaded stop words");
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Stop-word file unavailable, exclusion disabled");
            }
        }

        stop_words
    }

    /// Add every whitespace-separated token of `source`.
    ///
    /// Returns `true` if at least one word was loaded.
    pub fn load(&mut self, source: &str) -> bool {
        let mut loaded = 0usize;
        for token in source.split_whitespace() {
            let word = normalize(token);
            if !word.is_empty() {
                self.words.insert(word);
                loaded += 1;
            }
        }
        loaded > 0
    }

    /// Exact lookup; `word` must already be normalized
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether any words are excluded at all
    pub fn is_active(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
