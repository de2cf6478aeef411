//! Ciphertext solving command
//!
//! Solves one ciphertext and packages the best candidate with a shortlist.

use crate::output::formatters::{DEFAULT_PREVIEW_WIDTH, preview};
use crate::solver::{Candidate, SolveError, Solver};

/// Configuration for solving a ciphertext
pub struct SolveConfig {
    pub ciphertext: String,
    pub shortlist: usize,
    pub preview_width: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(ciphertext: String) -> Self {
        Self {
            ciphertext,
            shortlist: 5,
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

/// Result of solving a ciphertext
pub struct SolveReport {
    pub ciphertext: String,
    pub best: Candidate,
    pub shortlist: Vec<ShortlistEntry>,
    pub total_candidates: usize,
}

/// One line of the shortlist
#[derive(Debug, Clone, PartialEq)]
pub struct ShortlistEntry {
    pub shift: i32,
    pub total_score: f64,
    pub frequency_score: f64,
    pub word_match_count: usize,
    pub preview: String,
}

impl ShortlistEntry {
    fn from_candidate(candidate: &Candidate, preview_width: usize) -> Self {
        Self {
            shift: candidate.shift,
            total_score: candidate.total_score,
            frequency_score: candidate.frequency_score,
            word_match_count: candidate.word_match_count,
            preview: preview(&candidate.decoded_text, preview_width),
        }
    }
}

/// Solve a ciphertext using the given solver
///
/// # Errors
///
/// Returns [`SolveError::EmptyResult`] if the ciphertext has no letters, so
/// every shift reproduces it unchanged.
pub fn solve_text(config: SolveConfig, solver: &Solver) -> Result<SolveReport, SolveError> {
    let result = solver.solve(&config.ciphertext)?;

    let shortlist = result
        .top(config.shortlist)
        .iter()
        .map(|c| ShortlistEntry::from_candidate(c, config.preview_width))
        .collect();

    Ok(SolveReport {
        ciphertext: config.ciphertext,
        best: result.best().clone(),
        shortlist,
        total_candidates: result.len(),
    })
}
