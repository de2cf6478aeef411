//! Text analysis command
//!
//! Scores a text as-is, without trying any shifts, and breaks the frequency
//! score down per letter.

use crate::core::{LetterCounts, word_runs};
use crate::lexicon::Lexicon;
use crate::solver::scorer::{LetterDeviation, letter_deviations, score};

/// Result of analyzing a text
pub struct AnalysisResult {
    pub text: String,
    pub letters: usize,
    pub words: usize,
    pub matched_words: Vec<String>,
    pub word_matches: usize,
    pub frequency_score: f64,
    pub total_score: f64,
    pub deviations: Vec<LetterDeviation>,
}

/// Analyze how English-like `text` is
#[must_use]
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> AnalysisResult {
    let result = score(text, lexicon);

    let matched_words = word_runs(text)
        .filter(|word| lexicon.contains(word))
        .map(str::to_ascii_lowercase)
        .collect();

    AnalysisResult {
        text: text.to_string(),
        letters: LetterCounts::from_text(text).total(),
        words: word_runs(text).count(),
        matched_words,
        word_matches: result.word_matches,
        frequency_score: result.frequency,
        total_score: result.total,
        deviations: letter_deviations(text),
    }
}
