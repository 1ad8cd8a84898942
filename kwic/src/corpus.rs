//! Corpus reading and index construction

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::KwicError;
use crate::index::KeywordIndex;
use crate::normalize::is_lone_punctuation;
use crate::window::ContextWindow;

/// Read the whole corpus file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<String, KwicError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| KwicError::CorpusUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read corpus");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Whitespace-delimited words of `text`, with lone punctuation dropped
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|token| !is_lone_punctuation(token))
}

/// Stream every word of `text` through a context window into `index`.
pub fn build_index(text: &str, mut index: KeywordIndex) -> KeywordIndex {
    let mut window = ContextWindow::new();
    let mut words = 0usize;

    for token in tokens(text) {
        words += 1;
        if let Some(record) = window.admit(token) {
            index.add_context(record);
        }
    }
    for record in window.finish() {
        index.add_context(record);
    }

    info!(
        words,
        keywords = index.len(),
        occurrences = index.occurrence_count(),
        "Concordance built"
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopWords;
    use tempfile::TempDir;

    #[test]
    fn test_tokens_drop_lone_punctuation() {
        let words: Vec<&str> = tokens("Hello , world -- again !\n\tfin.").collect();
        assert_eq!(words, vec!["Hello", "world", "again", "fin."]);
    }

    #[test]
    fn test_punctuation_does_not_occupy_window_slots() {
        let index = build_index("a - b", KeywordIndex::default());
        let a = index.get("a").unwrap().first().unwrap();
        assert_eq!(a.post_context(), "b");
    }

    #[test]
    fn test_stop_word_exclusion() {
        let index = build_index("the cat sat", KeywordIndex::new(StopWords::from_words(["the", "a"])));
        assert!(index.contains("cat"));
        assert!(index.contains("sat"));
        assert!(!index.contains("the"));

        // stop words remain visible as context
        let cat = index.get("cat").unwrap().first().unwrap();
        assert_eq!(cat.pre_context(), "the");
    }

    #[test]
    fn test_repeated_word_counts_and_order() {
        let text = "one fish two fish red fish blue fish and more fish here";
        let index = build_index(text, KeywordIndex::default());
        let fish = index.get("fish").unwrap();
        assert_eq!(fish.len(), 5);

        let pre: Vec<String> = fish.iter().map(|r| r.pre_context()).collect();
        assert_eq!(pre[0], "one");
        assert_eq!(pre[1], "one fish two");
        assert_eq!(pre[4], "fish blue fish and more");
    }

    #[test]
    fn test_keys_are_normalized_but_context_is_raw() {
        let index = build_index("Don't, stop. dont", KeywordIndex::default());
        let dont = index.get("dont").unwrap();
        assert_eq!(dont.len(), 2);
        assert_eq!(dont.first().unwrap().key(), "Don't,");
        assert!(index.contains("stop"));
    }

    #[test]
    fn test_empty_corpus_builds_empty_index() {
        let index = build_index("  \n ", KeywordIndex::default());
        assert!(index.is_empty());

        let index = build_index(". , ;", KeywordIndex::default());
        assert!(index.is_empty());
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_corpus(temp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, KwicError::CorpusUnreadable { .. }));
    }

    #[test]
    fn test_read_corpus_lossy_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("corpus.txt");
        fs::write(&path, b"caf\xff ok").unwrap();

        let text = read_corpus(&path).unwrap();
        assert!(text.ends_with(" ok"));
    }
}
