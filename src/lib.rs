//! Caesar Solver
//!
//! Recovers Caesar-shifted English by trying every shift and ranking the
//! decodings by dictionary hits and letter-frequency closeness.
//!
//! # Quick Start
//!
//! ```rust
//! use caesar_solver::lexicon::Lexicon;
//! use caesar_solver::solver::Solver;
//!
//! let lexicon = Lexicon::from_words(["hello", "world"]);
//! let solver = Solver::new(&lexicon);
//!
//! let result = solver.solve("KHOOR ZRUOG").unwrap();
//! println!("Shift {}: {}", result.best().shift, result.best().decoded_text);
//! ```

// Core text transforms
pub mod core;

// Scoring and ranking
pub mod solver;

// Word lists
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
