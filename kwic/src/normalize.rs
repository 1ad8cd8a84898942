//! Word normalization

/// Strip ASCII punctuation from a word and lowercase what remains.
///
/// Punctuation is deleted, not replaced, so `"Don't,"` becomes `"dont"`.
/// A word made only of punctuation normalizes to the empty string.
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase()
}

/// True for a token that is nothing but punctuation, e.g. `"-"` or `"--"`.
///
/// Such tokens never enter the context window.
pub fn is_lone_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Don't,"), "dont");
        assert_eq!(normalize("dont"), "dont");
        assert_eq!(normalize("\"Hello!\""), "hello");
        assert_eq!(normalize("e-mail"), "email");
    }

    #[test]
    fn test_normalize_all_punctuation_is_empty() {
        assert_eq!(normalize("..."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_keeps_non_ascii_letters() {
        assert_eq!(normalize("Café"), "café");
    }

    #[test]
    fn test_is_lone_punctuation() {
        assert!(is_lone_punctuation("-"));
        assert!(is_lone_punctuation("--"));
        assert!(is_lone_punctuation("?!"));
        assert!(!is_lone_punctuation("a."));
        assert!(!is_lone_punctuation(""));
        assert!(!is_lone_punctuation("42"));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(word in "[a-zA-Z0-9éÉ'.,;:!?()-]{0,24}") {
            let once = normalize(&word);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_normalized_has_no_ascii_punctuation(word in "[ -~]{0,24}") {
            prop_assert!(!normalize(&word).chars().any(|c| c.is_ascii_punctuation()));
        }
    }
}
