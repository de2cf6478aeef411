//! Solve candidates and ranked results

use std::fmt;

/// One shift hypothesis and its score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub shift: i32,
    pub decoded_text: String,
    pub word_match_count: usize,
    pub frequency_score: f64,
    pub total_score: f64,
}

/// Error type for solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Every shift reproduced the ciphertext, so nothing was left to rank
    EmptyResult,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyResult => write!(
                f,
                "No candidates survived deduplication (ciphertext has no letters to shift)"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// Candidates ranked by total score, best first
///
/// Never empty: construction fails with [`SolveError::EmptyResult`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    candidates: Vec<Candidate>,
}

impl SolveResult {
    /// Wrap an already-sorted, non-empty candidate list
    ///
    /// # Errors
    /// Returns [`SolveError::EmptyResult`] if `candidates` is empty.
    pub(crate) fn new(candidates: Vec<Candidate>) -> Result<Self, SolveError> {
        if candidates.is_empty() {
            return Err(SolveError::EmptyResult);
        }
        Ok(Self { candidates })
    }

    /// The highest-scoring candidate
    #[must_use]
    pub fn best(&self) -> &Candidate {
        // Non-empty by construction
        &self.candidates[0]
    }

    /// Up to `n` leading candidates
    #[must_use]
    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    /// All candidates in rank order
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// 1-based rank of the first candidate whose text equals `text`
    #[must_use]
    pub fn rank_of(&self, text: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.decoded_text == text)
            .map(|i| i + 1)
    }

    /// Number of ranked candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a SolveResult {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(shift: i32, text: &str, total: f64) -> Candidate {
        Candidate {
            shift,
            decoded_text: text.to_string(),
            word_match_count: 0,
            frequency_score: total,
            total_score: total,
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(SolveResult::new(Vec::new()), Err(SolveError::EmptyResult));
    }

    #[test]
    fn best_is_first() {
        let result =
            SolveResult::new(vec![candidate(-3, "abc", 9.0), candidate(1, "bcd", 1.0)]).unwrap();
        assert_eq!(result.best().shift, -3);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn top_clamps_to_length() {
        let result = SolveResult::new(vec![candidate(1, "a", 1.0)]).unwrap();
        assert_eq!(result.top(5).len(), 1);
        assert_eq!(result.top(0).len(), 0);
    }

    #[test]
    fn rank_of_finds_first_match() {
        let result = SolveResult::new(vec![
            candidate(2, "x", 3.0),
            candidate(-3, "y", 2.0),
            candidate(23, "y", 2.0),
        ])
        .unwrap();
        assert_eq!(result.rank_of("y"), Some(2));
        assert_eq!(result.rank_of("z"), None);
    }

    #[test]
    fn error_message_mentions_deduplication() {
        assert!(SolveError::EmptyResult.to_string().contains("deduplication"));
    }
}
