//! Caesar solving and ranking
//!
//! Scores every shift of a ciphertext and ranks the decoded candidates.

mod candidate;
mod engine;
pub mod scorer;

pub use candidate::{Candidate, SolveError, SolveResult};
pub use engine::{Solver, candidate_shifts, solve};
pub use scorer::{Score, WORD_MATCH_WEIGHT, score};
