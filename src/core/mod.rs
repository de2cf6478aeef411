//! Core domain functions for Caesar cryptanalysis
//!
//! Pure text transforms with no I/O: the shift itself, word tokenization
//! and the English letter-frequency reference.

mod frequency;
mod shift;
mod tokenize;

pub use frequency::{ENGLISH_FREQUENCIES, FREQUENCY_ORDER, LetterCounts};
pub use shift::{ALPHABET_LEN, apply_shift};
pub use tokenize::{MIN_WORD_LEN, extract_words, normalize, word_runs};
