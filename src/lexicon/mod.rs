//! Word lists for plausibility scoring
//!
//! A [`Lexicon`] is built once per run, either from a dictionary file or
//! from the embedded fallback set, and never changes afterwards.

mod embedded;
pub mod loader;
mod words;

pub use embedded::{FALLBACK_MARKER, FALLBACK_WORDS};
pub use loader::{DEFAULT_DICTIONARY_PATH, LexiconUnavailable, load_or_fallback};
pub use words::Lexicon;
