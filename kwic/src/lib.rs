//! KWIC - Keyword-In-Context concordance builder
//!
//! Streams the words of a corpus through a fixed-width sliding window, files every
//! context under its normalized keyword, and renders the result as three aligned
//! columns: the words before, the keyword, the words after.
//!
//! # Architecture
//!
//! ```text
//! corpus text
//!   └── tokens (whitespace split, lone punctuation dropped)
//!         └── ContextWindow      5 pre | key | 5 post
//!               └── KeywordIndex  word -> OccurrenceList (alphabetical)
//!                     └── Formatter / JSON
//! ```
//!
//! # Example
//!
//! ```
//! use kwic::{KeywordIndex, StopWords, build_index};
//!
//! let index = build_index("the cat sat on the mat", KeywordIndex::new(StopWords::from_words(["the"])));
//! let words: Vec<&str> = index.traverse().map(|(word, _)| word).collect();
//! assert_eq!(words, vec!["cat", "mat", "on", "sat"]);
//! ```

pub mod cli;
pub mod config;
mod corpus;
mod error;
mod format;
mod index;
mod normalize;
mod occurrences;
mod stopwords;
mod window;

pub use corpus::{build_index, read_corpus, tokens};
pub use error::KwicError;
pub use format::{ConcordanceEntry, Formatter, Layout, OccurrenceView, to_entries};
pub use index::{KeywordIndex, MaxLengths};
pub use normalize::{is_lone_punctuation, normalize};
pub use occurrences::OccurrenceList;
pub use stopwords::StopWords;
pub use window::{CONTEXT_SLOTS, ContextRecord, ContextWindow, Flush, KEY_SLOT};

/// Message printed when the corpus yields no indexable words
pub const NO_WORDS_MESSAGE: &str = "No words found in corpus file!";

/// Default stop-word file, looked up relative to the working directory
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";
