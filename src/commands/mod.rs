//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_text};
pub use benchmark::{BenchmarkCase, BenchmarkResult, SAMPLE_SENTENCES, random_cases, run_benchmark};
pub use simple::run_simple;
pub use solve::{ShortlistEntry, SolveConfig, SolveReport, solve_text};
