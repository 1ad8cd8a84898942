//! Sliding context window
//!
//! The window is a fixed row of eleven slots: five words of pre-context, the
//! keyword, five words of post-context. Words enter at the right; once the
//! window is primed, every admitted word completes the context of the word
//! five positions behind it, which is emitted before the row shifts left.
//!
//! ```text
//!   0   1   2   3   4 | 5 | 6   7   8   9   10
//!   ---- pre-context --|key|--- post-context ---
//! ```

/// Number of slots in a context record
pub const CONTEXT_SLOTS: usize = 11;

/// Index of the keyword slot
pub const KEY_SLOT: usize = 5;

/// Words admitted before the keyword slot is first emitted
const PRIMED: usize = CONTEXT_SLOTS - KEY_SLOT;

/// One keyword and up to five words on either side of it.
///
/// Slots with no word hold the empty string. Records are never modified once
/// they leave the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextRecord([String; CONTEXT_SLOTS]);

impl ContextRecord {
    /// Build a record directly from its eleven slots
    pub fn from_slots(slots: [String; CONTEXT_SLOTS]) -> Self {
        Self(slots)
    }

    /// The raw keyword as it appeared in the corpus
    pub fn key(&self) -> &str {
        &self.0[KEY_SLOT]
    }

    pub fn slots(&self) -> &[String; CONTEXT_SLOTS] {
        &self.0
    }

    pub fn pre_words(&self) -> &[String] {
        &self.0[..KEY_SLOT]
    }

    pub fn post_words(&self) -> &[String] {
        &self.0[KEY_SLOT + 1..]
    }

    /// Pre-context words joined by single spaces, empty slots skipped
    pub fn pre_context(&self) -> String {
        join_words(self.pre_words())
    }

    /// Post-context words joined by single spaces, empty slots skipped
    pub fn post_context(&self) -> String {
        join_words(self.post_words())
    }

    /// Total characters in the pre-context words, separators excluded
    pub fn pre_len(&self) -> usize {
        char_total(self.pre_words())
    }

    pub fn key_len(&self) -> usize {
        self.key().chars().count()
    }

    /// Total characters in the post-context words, separators excluded
    pub fn post_len(&self) -> usize {
        char_total(self.post_words())
    }

    /// The next window state: every slot moves one place left and the last
    /// slot is cleared.
    pub fn shifted(mut self) -> Self {
        self.0.rotate_left(1);
        self.0[CONTEXT_SLOTS - 1].clear();
        self
    }
}

fn join_words(words: &[String]) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn char_total(words: &[String]) -> usize {
    words.iter().map(|w| w.chars().count()).sum()
}

/// Builds context records as the corpus streams past.
#[derive(Debug, Clone, Default)]
pub struct ContextWindow {
    slots: ContextRecord,
    admitted: usize,
}

impl ContextWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words admitted so far, capped once the window is primed
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Current window contents
    pub fn current(&self) -> &ContextRecord {
        &self.slots
    }

    /// Push one word into the window.
    ///
    /// The first five words fill the keyword slot and the slots after it. From
    /// the sixth word on, each word lands in the last slot and completes a
    /// record, which is returned.
    pub fn admit(&mut self, word: &str) -> Option<ContextRecord> {
        if self.admitted < PRIMED {
            self.slots.0[self.admitted + KEY_SLOT] = word.to_string();
            self.admitted += 1;
        } else {
            self.slots.0[CONTEXT_SLOTS - 1] = word.to_string();
        }

        if self.admitted < PRIMED {
            return None;
        }
        Some(self.emit())
    }

    /// Drain the keywords still waiting in the window at end of stream.
    pub fn finish(self) -> Flush {
        Flush { slots: self.slots }
    }

    fn emit(&mut self) -> ContextRecord {
        let record = self.slots.clone();
        self.slots = std::mem::take(&mut self.slots).shifted();
        record
    }
}

/// End-of-stream drain: yields the window while its keyword slot is occupied.
#[derive(Debug)]
pub struct Flush {
    slots: ContextRecord,
}

impl Iterator for Flush {
    type Item = ContextRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slots.key().is_empty() {
            return None;
        }
        let record = self.slots.clone();
        self.slots = std::mem::take(&mut self.slots).shifted();
        Some(record)
    }
}
