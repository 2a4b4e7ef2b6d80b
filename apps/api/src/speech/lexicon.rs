use std::collections::HashSet;

/// Built-in filler words tracked as coaching signals.
pub const DEFAULT_FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "so",
    "actually",
    "basically",
    "literally",
];

/// The set of filler words an analysis matches against.
///
/// Matching policy: membership is tested per whitespace-split token, after
/// the token has been stripped of leading/trailing punctuation and
/// lowercased. Multi-word entries such as "you know" are accepted in the
/// set but can never match a single token, so they are inert under this
/// policy.
#[derive(Debug, Clone)]
pub struct FillerLexicon {
    words: HashSet<String>,
}

impl Default for FillerLexicon {
    fn default() -> Self {
        Self::from_words(DEFAULT_FILLER_WORDS.iter().copied())
    }
}

impl FillerLexicon {
    /// Builds a lexicon from caller-supplied words, normalizing each entry
    /// (trimmed, lowercased). Empty entries are discarded.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Tests membership of an already-cleaned token (lowercased, punctuation
    /// stripped).
    pub fn contains(&self, cleaned_token: &str) -> bool {
        self.words.contains(cleaned_token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_has_eight_entries() {
        let lexicon = FillerLexicon::default();
        assert_eq!(lexicon.len(), 8);
        assert!(lexicon.contains("um"));
        assert!(lexicon.contains("literally"));
    }

    #[test]
    fn test_from_words_normalizes_entries() {
        let lexicon = FillerLexicon::from_words(["  Um ", "UH", ""]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("um"));
        assert!(lexicon.contains("uh"));
    }

    #[test]
    fn test_membership_is_exact_after_cleaning() {
        let lexicon = FillerLexicon::default();
        // Raw tokens are the caller's responsibility to clean first.
        assert!(!lexicon.contains("Um"));
        assert!(!lexicon.contains("um,"));
    }

    #[test]
    fn test_empty_override_matches_nothing() {
        let lexicon = FillerLexicon::from_words(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("um"));
    }
}
