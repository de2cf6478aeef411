//! Built-in fallback word list
//!
//! Used when no external dictionary can be read. Deliberately tiny: it
//! keeps the solver usable, with the frequency score doing most of the work.

/// Words known without any dictionary file
///
/// The last entry, [`FALLBACK_MARKER`], lets [`super::Lexicon::is_fallback`]
/// tell this set apart from a loaded dictionary.
pub const FALLBACK_WORDS: &[&str] = &[
    "the", "and", "hello", "world", "test", "this", "example", "python",
];

/// Marker word identifying the built-in fallback set
pub const FALLBACK_MARKER: &str = "python";
