//! Main Caesar solver interface

use super::candidate::{Candidate, SolveError, SolveResult};
use super::scorer::score;
use crate::core::{ALPHABET_LEN, apply_shift, normalize};
use crate::lexicon::Lexicon;
use rayon::prelude::*;

/// Every shift tried, in enumeration order: −26..=−1 then 1..=26
///
/// Ties in score keep this order.
pub fn candidate_shifts() -> impl Iterator<Item = i32> {
    (-ALPHABET_LEN..=ALPHABET_LEN).filter(|&shift| shift != 0)
}

/// Main Caesar solver
///
/// Holds only a borrowed lexicon; each [`Solver::solve`] call is independent.
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given lexicon
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon used for word matching
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Decode and score `ciphertext` under a single shift
    #[must_use]
    pub fn evaluate(&self, ciphertext: &str, shift: i32) -> Candidate {
        let decoded_text = apply_shift(ciphertext, shift);
        let result = score(&decoded_text, self.lexicon);

        Candidate {
            shift,
            decoded_text,
            word_match_count: result.word_matches,
            frequency_score: result.frequency,
            total_score: result.total,
        }
    }

    /// Try every shift and rank the decoded texts
    ///
    /// Shifts whose output normalizes (whitespace removed, case-folded) to the
    /// same string as the ciphertext are dropped. Congruent shifts such as
    /// `1` and `-25` both survive and appear as separate, equal candidates.
    ///
    /// # Errors
    /// Returns [`SolveError::EmptyResult`] when nothing survives, which
    /// happens exactly when the ciphertext contains no ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use caesar_solver::lexicon::Lexicon;
    /// use caesar_solver::solver::Solver;
    ///
    /// let lexicon = Lexicon::from_words(["hello", "world"]);
    /// let solver = Solver::new(&lexicon);
    ///
    /// let result = solver.solve("KHOOR ZRUOG").unwrap();
    /// assert_eq!(result.best().shift, -3);
    /// assert_eq!(result.best().decoded_text, "HELLO WORLD");
    /// ```
    pub fn solve(&self, ciphertext: &str) -> Result<SolveResult, SolveError> {
        let original_normalized = normalize(ciphertext);
        let shifts: Vec<i32> = candidate_shifts().collect();

        // Collect keeps enumeration order regardless of scheduling
        let mut candidates: Vec<Candidate> = shifts
            .into_par_iter()
            .filter_map(|shift| {
                let candidate = self.evaluate(ciphertext, shift);
                (normalize(&candidate.decoded_text) != original_normalized).then_some(candidate)
            })
            .collect();

        // Stable: equal scores stay in shift enumeration order
        candidates.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        SolveResult::new(candidates)
    }
}

/// Solve `ciphertext` with a one-off [`Solver`]
///
/// # Errors
/// See [`Solver::solve`].
pub fn solve(ciphertext: &str, lexicon: &Lexicon) -> Result<SolveResult, SolveError> {
    Solver::new(lexicon).solve(ciphertext)
}
