//! Word and prefix sets used to prune the grid search.

use std::collections::HashSet;

/// An immutable dictionary: uppercase words plus every proper prefix of them.
///
/// Both sets are built once in [`Lexicon::build`] and only read afterwards, so a
/// single lexicon can back any number of searches.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from raw words (any case, duplicates allowed).
    ///
    /// Every word is uppercased; for a word of `n` characters the prefixes of
    /// lengths `1..n` (characters, not bytes) go into the prefix set. Empty words
    /// are skipped.
    pub fn build<I, S>(words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::default();

        for raw in words {
            let word = raw.as_ref().to_uppercase();
            if word.is_empty() {
                continue;
            }

            // char_indices skips index 0, so the empty prefix never goes in
            for (i, _) in word.char_indices().skip(1) {
                lexicon.prefixes.insert(word[..i].to_string());
            }
            lexicon.words.insert(word);
        }

        lexicon
    }

    /// Exact membership in the word set (`s` must already be uppercase).
    #[must_use]
    #[inline]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// `true` if `s` is a proper prefix of at least one word.
    #[must_use]
    #[inline]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct proper prefixes.
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Lexicon::build(iter)
    }
}
