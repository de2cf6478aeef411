//! Benchmark command
//!
//! Encrypts known sentences, solves them, and measures how often the
//! plaintext comes out on top.

use crate::core::apply_shift;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Built-in plaintexts used when benchmarking
pub const SAMPLE_SENTENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Hello world, this is a test of the cipher solver.",
    "Meet me at the old bridge at midnight and bring the map.",
    "All that glitters is not gold.",
    "It was the best of times, it was the worst of times.",
    "To be or not to be, that is the question.",
    "Knowledge is power, and the pen is mightier than the sword.",
    "Attack at dawn from the eastern ridge.",
    "The rain in Spain stays mainly in the plain.",
    "Every cloud has a silver lining.",
    "Send reinforcements to the northern gate before sunrise.",
    "This example shows how frequency analysis breaks simple ciphers.",
];

/// A plaintext and the shift used to encrypt it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub plaintext: String,
    pub shift: i32,
}

impl BenchmarkCase {
    #[must_use]
    pub fn ciphertext(&self) -> String {
        apply_shift(&self.plaintext, self.shift)
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_cases: usize,
    pub recovered: usize,
    pub accuracy: f64,
    pub average_rank: f64,
    pub worst_rank: usize,
    pub failures: Vec<BenchmarkCase>,
    pub duration: Duration,
    pub solves_per_second: f64,
}

/// Draw `count` cases from `sentences`, each with a random shift in 1..=25
///
/// Returns an empty list if `sentences` is empty.
#[must_use]
pub fn random_cases(sentences: &[&str], count: usize) -> Vec<BenchmarkCase> {
    let mut rng = rand::rng();

    (0..count)
        .filter_map(|_| {
            let &plaintext = sentences.choose(&mut rng)?;
            Some(BenchmarkCase {
                plaintext: plaintext.to_string(),
                shift: rng.random_range(1..26),
            })
        })
        .collect()
}

/// Run the solver on every case and measure recovery
///
/// A case is recovered when the best candidate decodes to the plaintext.
/// Ranks are 1-based and only averaged over cases where the plaintext shows
/// up among the candidates at all.
pub fn run_benchmark(solver: &Solver, cases: &[BenchmarkCase]) -> BenchmarkResult {
    let pb = ProgressBar::new(cases.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut recovered = 0;
    let mut ranked = 0;
    let mut rank_sum = 0;
    let mut worst_rank = 0;
    let mut failures = Vec::new();

    for case in cases {
        let rank = solver
            .solve(&case.ciphertext())
            .ok()
            .and_then(|result| result.rank_of(&case.plaintext));

        if rank == Some(1) {
            recovered += 1;
        } else {
            failures.push(case.clone());
        }
        if let Some(rank) = rank {
            ranked += 1;
            rank_sum += rank;
            worst_rank = worst_rank.max(rank);
        }

        pb.set_message(format!("{recovered} recovered"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_cases = cases.len();
    let accuracy = if total_cases == 0 {
        0.0
    } else {
        recovered as f64 / total_cases as f64
    };
    let average_rank = if ranked == 0 {
        0.0
    } else {
        rank_sum as f64 / ranked as f64
    };

    BenchmarkResult {
        total_cases,
        recovered,
        accuracy,
        average_rank,
        worst_rank,
        failures,
        duration,
        solves_per_second: total_cases as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
