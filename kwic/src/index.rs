//! Ordered keyword index
//!
//! Maps each normalized keyword to the list of contexts it appeared in.
//! Traversal is always alphabetical by keyword, whatever order the corpus
//! introduced the words in. The index also tracks the widest pre-context,
//! keyword and post-context seen, which the formatter turns into column widths.

use std::collections::BTreeMap;

use tracing::debug;

use crate::normalize::normalize;
use crate::occurrences::OccurrenceList;
use crate::stopwords::StopWords;
use crate::window::ContextRecord;

/// Running maxima of the three column contents, in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxLengths {
    /// Longest total pre-context (sum of the word lengths)
    pub pre: usize,
    /// Longest keyword
    pub key: usize,
    /// Longest total post-context (sum of the word lengths)
    pub post: usize,
}

impl MaxLengths {
    /// Widen the maxima to cover `context`
    pub fn observe(&mut self, context: &ContextRecord) {
        self.pre = self.pre.max(context.pre_len());
        self.key = self.key.max(context.key_len());
        self.post = self.post.max(context.post_len());
    }
}

/// Keyword -> occurrences, in alphabetical order.
///
/// `clone()` produces an independent deep copy.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: BTreeMap<String, OccurrenceList>,
    max_lengths: MaxLengths,
    stop_words: StopWords,
}

impl KeywordIndex {
    /// Create an empty index that excludes `stop_words`
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            ..Self::default()
        }
    }

    /// File `context` under the normalized form of `word`.
    ///
    /// The raw context is stored as-is for display. Stop words get no entry, but
    /// their context still counts towards the max lengths. Returns `true` if an
    /// entry was created or extended.
    pub fn add(&mut self, word: &str, context: ContextRecord) -> bool {
        self.max_lengths.observe(&context);

        let key = normalize(word);
        if key.is_empty() {
            debug!(word, "Skipping keyword with no indexable characters");
            return false;
        }
        if self.stop_words.is_stop_word(&key) {
            return false;
        }

        self.entries.entry(key).or_default().add(context);
        true
    }

    /// File `context` under its own keyword slot
    pub fn add_context(&mut self, context: ContextRecord) -> bool {
        let word = context.key().to_string();
        self.add(&word, context)
    }

    /// Entries in alphabetical order
    pub fn traverse(&self) -> impl Iterator<Item = (&str, &OccurrenceList)> {
        self.entries.iter().map(|(word, list)| (word.as_str(), list))
    }

    /// Occurrences of an already-normalized word
    pub fn get(&self, word: &str) -> Option<&OccurrenceList> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of indexed contexts across all keywords
    pub fn occurrence_count(&self) -> usize {
        self.entries.values().map(OccurrenceList::len).sum()
    }

    pub fn max_lengths(&self) -> MaxLengths {
        self.max_lengths
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Drop every entry and reset the max lengths. Stop words are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.max_lengths = MaxLengths::default();
    }
}
