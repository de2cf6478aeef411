//! Plausibility scoring for decoded text
//!
//! Two signals are combined: how many tokens are dictionary words, and how
//! close the letter distribution is to English.
//!
//! # Formula
//! frequency = Σ over A..Z of (100 − |observed% − expected%|)
//!
//! total = 10 × word matches + frequency
//!
//! A perfect distribution match scores 2600; skewed text scores lower.
//! The value is a ranking signal, not a probability.

use crate::core::{ENGLISH_FREQUENCIES, FREQUENCY_ORDER, LetterCounts, word_runs};
use crate::lexicon::Lexicon;

/// Points awarded per dictionary word found
pub const WORD_MATCH_WEIGHT: f64 = 10.0;

/// Scoring breakdown for one piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Number of tokens found in the lexicon (repeats counted)
    pub word_matches: usize,
    /// Closeness of the letter distribution to English
    pub frequency: f64,
    /// Combined ranking score
    pub total: f64,
}

/// Observed vs. expected frequency for a single letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterDeviation {
    pub letter: char,
    pub count: usize,
    pub observed: f64,
    pub expected: f64,
}

impl LetterDeviation {
    /// Contribution of this letter to the frequency score
    #[must_use]
    pub fn contribution(&self) -> f64 {
        100.0 - (self.observed - self.expected).abs()
    }
}

/// Score `text` against `lexicon`
///
/// # Examples
/// ```
/// use caesar_solver::lexicon::Lexicon;
/// use caesar_solver::solver::score;
///
/// let lexicon = Lexicon::from_words(["hello", "world"]);
/// let result = score("HELLO WORLD", &lexicon);
///
/// assert_eq!(result.word_matches, 2);
/// assert!((result.total - (20.0 + result.frequency)).abs() < 1e-9);
/// ```
#[must_use]
pub fn score(text: &str, lexicon: &Lexicon) -> Score {
    let word_matches = count_word_matches(text, lexicon);
    let frequency = frequency_score(text);

    Score {
        word_matches,
        frequency,
        total: word_matches as f64 * WORD_MATCH_WEIGHT + frequency,
    }
}

/// Count tokens of two or more letters that appear in the lexicon
///
/// Every occurrence counts, so `"the the"` is two matches.
#[must_use]
pub fn count_word_matches(text: &str, lexicon: &Lexicon) -> usize {
    word_runs(text).filter(|word| lexicon.contains(word)).count()
}

/// Letter-distribution closeness to English
///
/// Returns exactly 0.0 when `text` contains no ASCII letters. Otherwise every
/// letter of the table contributes a term, including letters absent from
/// the text.
#[must_use]
pub fn frequency_score(text: &str) -> f64 {
    let counts = LetterCounts::from_text(text);
    if counts.is_empty() {
        return 0.0;
    }

    FREQUENCY_ORDER
        .iter()
        .map(|&index| 100.0 - (counts.percentage_at(index) - ENGLISH_FREQUENCIES[index]).abs())
        .sum()
}

/// Per-letter breakdown of the frequency score, most common letter first
///
/// Observed percentages are all zero when `text` has no letters.
#[must_use]
pub fn letter_deviations(text: &str) -> Vec<LetterDeviation> {
    let counts = LetterCounts::from_text(text);

    FREQUENCY_ORDER
        .iter()
        .map(|&index| LetterDeviation {
            letter: char::from(b'A' + index as u8),
            count: counts.count_at(index),
            observed: counts.percentage_at(index),
            expected: ENGLISH_FREQUENCIES[index],
        })
        .collect()
}
