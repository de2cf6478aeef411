//! English letter frequencies
//!
//! Expected percentage of each letter in English prose, and helpers to
//! measure the observed distribution of a text.

/// Expected frequency (percent) of each uppercase letter, indexed `A..=Z`
///
/// Values sum to roughly 100.
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.17,  // A
    1.49,  // B
    2.78,  // C
    4.25,  // D
    12.70, // E
    2.23,  // F
    2.02,  // G
    6.09,  // H
    6.97,  // I
    0.15,  // J
    0.77,  // K
    4.03,  // L
    2.41,  // M
    6.75,  // N
    7.51,  // O
    1.93,  // P
    0.10,  // Q
    5.99,  // R
    6.33,  // S
    9.06,  // T
    2.76,  // U
    0.98,  // V
    2.36,  // W
    0.15,  // X
    1.97,  // Y
    0.07,  // Z
];

/// Alphabet indices from most to least common English letter
///
/// Frequency sums run in this order so equal-weight letters (J and X)
/// produce bit-identical scores.
pub const FREQUENCY_ORDER: [usize; 26] = [
    4, 19, 0, 14, 8, 13, 18, 7, 17, 3, // E T A O I N S H R D
    11, 2, 20, 12, 22, 5, 6, 24, 15, 1, // L C U M W F G Y P B
    21, 10, 9, 23, 16, 25, // V K J X Q Z
];

/// Letter counts of a text, case-folded, ASCII letters only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [usize; 26],
    total: usize,
}

impl LetterCounts {
    /// Count the ASCII letters of `text`, ignoring every other character
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0usize; 26];
        let mut total = 0;

        for byte in text.bytes().filter(u8::is_ascii_alphabetic) {
            counts[usize::from(byte.to_ascii_uppercase() - b'A')] += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Total number of letters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether the text contained no letters at all
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Raw count for the letter at alphabet index `index` (0 = A)
    ///
    /// # Panics
    /// Panics if `index >= 26`
    #[inline]
    #[must_use]
    pub const fn count_at(&self, index: usize) -> usize {
        self.counts[index]
    }

    /// Observed percentage of the letter at alphabet index `index`
    ///
    /// Returns 0.0 when no letters were counted.
    #[must_use]
    pub fn percentage_at(&self, index: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.counts[index] as f64 / self.total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sums_to_about_one_hundred() {
        let sum: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((sum - 100.0).abs() < 0.5, "sum was {sum}");
    }

    #[test]
    fn e_is_most_common_z_least() {
        let max = ENGLISH_FREQUENCIES
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i);
        let min = ENGLISH_FREQUENCIES
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i);

        assert_eq!(max, Some(4));
        assert_eq!(min, Some(25));
    }

    #[test]
    fn frequency_order_is_a_descending_permutation() {
        let mut seen = FREQUENCY_ORDER;
        seen.sort_unstable();
        assert_eq!(seen, std::array::from_fn::<usize, 26, _>(|i| i));

        assert!(
            FREQUENCY_ORDER
                .windows(2)
                .all(|w| ENGLISH_FREQUENCIES[w[0]] >= ENGLISH_FREQUENCIES[w[1]])
        );
    }

    #[test]
    fn counts_fold_case_and_skip_non_letters() {
        let counts = LetterCounts::from_text("Aa b! 42 é");
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.count_at(0), 2);
        assert_eq!(counts.count_at(1), 1);
    }

    #[test]
    fn percentages_of_uniform_text() {
        let counts = LetterCounts::from_text("abab");
        assert!((counts.percentage_at(0) - 50.0).abs() < f64::EPSILON);
        assert!((counts.percentage_at(1) - 50.0).abs() < f64::EPSILON);
        assert!(counts.percentage_at(2).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_text_has_no_letters() {
        let counts = LetterCounts::from_text("  123 ?!");
        assert!(counts.is_empty());
        assert!(counts.percentage_at(4).abs() < f64::EPSILON);
    }
}
