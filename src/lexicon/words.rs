//! Lexicon representation
//!
//! An immutable set of lowercase words used to judge whether decoded text
//! looks like real language.

use super::embedded::{FALLBACK_MARKER, FALLBACK_WORDS};
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Immutable set of known lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from raw entries
    ///
    /// Each entry is trimmed; it is kept only if what remains is non-empty
    /// and made up solely of alphabetic characters. Kept entries are
    /// lowercased and deduplicated.
    ///
    /// # Examples
    /// ```
    /// use caesar_solver::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Hello", " world ", "it's", "abc1", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("HELLO"));
    /// assert!(!lexicon.contains("it's"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self { words }
    }

    /// The small built-in word set used when no dictionary is available
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let key: Cow<'_, str> = if word.chars().any(char::is_uppercase) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.words.contains(&*key)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether this is the built-in fallback set rather than a loaded dictionary
    ///
    /// Recognized by size plus the presence of [`FALLBACK_MARKER`].
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.words.len() == FALLBACK_WORDS.len() && self.contains(FALLBACK_MARKER)
    }
}
