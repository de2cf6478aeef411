//! Word extraction and text normalization
//!
//! Words are maximal runs of ASCII letters. A run ends at any other
//! character, so `"don't"` yields `don` and a lone `t` (which is dropped
//! for being shorter than [`MIN_WORD_LEN`]).

/// Shortest run of letters counted as a word
pub const MIN_WORD_LEN: usize = 2;

/// Iterate over the maximal ASCII-letter runs of `text` with at least
/// [`MIN_WORD_LEN`] letters, in their original case
///
/// # Examples
/// ```
/// use caesar_solver::core::word_runs;
///
/// let runs: Vec<&str> = word_runs("Hi, a b2cd--EFG").collect();
/// assert_eq!(runs, vec!["Hi", "cd", "EFG"]);
/// ```
pub fn word_runs(text: &str) -> impl Iterator<Item = &str> {
    // ASCII letters are single bytes, so splitting on anything else keeps
    // every slice on a char boundary.
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| run.len() >= MIN_WORD_LEN)
}

/// Extract all words from `text`, lowercased
///
/// Repeated words are kept; every occurrence is returned.
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    word_runs(text).map(str::to_ascii_lowercase).collect()
}

/// Strip all whitespace and case-fold
///
/// Two texts that normalize equally are treated as the same message.
///
/// # Examples
/// ```
/// use caesar_solver::core::normalize;
///
/// assert_eq!(normalize("Hello  World\n"), "helloworld");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_words() {
        assert_eq!(extract_words("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn single_letters_are_skipped() {
        assert_eq!(extract_words("a I x"), Vec::<String>::new());
        assert_eq!(extract_words("I am a test"), vec!["am", "test"]);
    }

    #[test]
    fn digits_and_punctuation_split_words() {
        assert_eq!(extract_words("abc1def"), vec!["abc", "def"]);
        assert_eq!(extract_words("don't"), vec!["don"]);
        assert_eq!(extract_words("well-known,fact."), vec!["well", "known", "fact"]);
    }

    #[test]
    fn non_ascii_letters_split_words() {
        assert_eq!(extract_words("caféteria"), vec!["caf", "teria"]);
    }

    #[test]
    fn repeated_words_all_count() {
        assert_eq!(extract_words("the THE The"), vec!["the", "the", "the"]);
    }

    #[test]
    fn empty_and_letterless_inputs() {
        assert!(extract_words("").is_empty());
        assert!(extract_words("!!!123   ").is_empty());
    }

    #[test]
    fn word_runs_keep_original_case() {
        let runs: Vec<&str> = word_runs("KHOOR zruog").collect();
        assert_eq!(runs, vec!["KHOOR", "zruog"]);
    }

    #[test]
    fn normalize_removes_all_whitespace_kinds() {
        assert_eq!(normalize(" A\tb\nC  d\r\n"), "abcd");
        assert_eq!(normalize("!!! 123"), "!!!123");
        assert_eq!(normalize(""), "");
    }
}
