//! Dictionary file loading
//!
//! Reads a newline-delimited word list. A missing or unreadable file is not
//! fatal: callers get the built-in lexicon plus a warning to show the user.

use super::Lexicon;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the system word list usually lives on Unix-like systems
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// The dictionary file could not be read
///
/// Recovered locally by falling back to [`Lexicon::builtin`].
#[derive(Debug)]
pub struct LexiconUnavailable {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for LexiconUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dictionary not readable at {} ({}). Defaulting to a mini word list.",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for LexiconUnavailable {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Load a lexicon from a word-list file
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so such lines
/// simply fail the alphabetic check and are skipped.
///
/// # Errors
///
/// Returns [`LexiconUnavailable`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use caesar_solver::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconUnavailable> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LexiconUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Lexicon::from_words(String::from_utf8_lossy(&bytes).lines()))
}

/// Load a lexicon, falling back to the built-in set if the file is unusable
///
/// The second element is `Some` exactly when the fallback was taken.
///
/// # Examples
/// ```
/// use caesar_solver::lexicon::loader::load_or_fallback;
///
/// let (lexicon, warning) = load_or_fallback("/definitely/not/a/real/path");
/// assert!(warning.is_some());
/// assert!(lexicon.contains("hello"));
/// ```
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> (Lexicon, Option<LexiconUnavailable>) {
    match load_from_file(path) {
        Ok(lexicon) => (lexicon, None),
        Err(warning) => (Lexicon::builtin(), Some(warning)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dictionary(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "caesar_solver_{}_{}.txt",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn loads_valid_entries_from_file() {
        let path = temp_dictionary("valid", b"Hello\nworld\n\nit's\nabc1\n  spaced  \n");
        let lexicon = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("hello"));
        assert!(lexicon.contains("world"));
        assert!(lexicon.contains("spaced"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let path = temp_dictionary("crlf", b"alpha\r\nbeta\r\n");
        let lexicon = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(lexicon.contains("alpha"));
        assert!(lexicon.contains("beta"));
    }

    #[test]
    fn invalid_utf8_lines_are_skipped() {
        let path = temp_dictionary("lossy", b"good\n\xff\xfebad\nfine\n");
        let lexicon = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("good"));
        assert!(lexicon.contains("fine"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_from_file("/nonexistent/caesar/words");
        let err = result.unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/nonexistent/caesar/words"));
    }

    #[test]
    fn fallback_used_for_missing_file() {
        let (lexicon, warning) = load_or_fallback("/nonexistent/caesar/words");
        assert!(warning.is_some());
        assert_eq!(lexicon, Lexicon::builtin());
    }

    #[test]
    fn fallback_used_for_unreadable_path() {
        // A directory exists but cannot be read as a word list
        let (lexicon, warning) = load_or_fallback(std::env::temp_dir());
        assert!(warning.is_some());
        assert_eq!(lexicon, Lexicon::builtin());
        assert!(lexicon.is_fallback());
    }

    #[test]
    fn no_warning_when_file_loads() {
        let path = temp_dictionary("ok", b"cipher\n");
        let (lexicon, warning) = load_or_fallback(&path);
        fs::remove_file(&path).unwrap();

        assert!(warning.is_none());
        assert!(lexicon.contains("cipher"));
        assert!(!lexicon.contains("hello"));
    }
}
