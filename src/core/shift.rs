//! Caesar shift transform
//!
//! Rotates ASCII letters within their own case's alphabet. Everything else
//! (digits, punctuation, whitespace, non-ASCII) passes through untouched.

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: i32 = 26;

/// Apply a signed alphabetic shift to `text`
///
/// Each ASCII letter moves to `(position + shift) mod 26` using true
/// (Euclidean) modulo, so negative shifts wrap backwards. Case is kept.
/// `shift`, `shift + 26` and `shift - 26` always give the same output.
///
/// # Examples
/// ```
/// use caesar_solver::core::apply_shift;
///
/// assert_eq!(apply_shift("abc, XYZ!", 1), "bcd, YZA!");
/// assert_eq!(apply_shift("Zz", 1), "Aa");
/// assert_eq!(apply_shift("KHOOR ZRUOG", -3), "HELLO WORLD");
/// ```
#[must_use]
pub fn apply_shift(text: &str, shift: i32) -> String {
    let offset = shift.rem_euclid(ALPHABET_LEN) as u8;
    text.chars().map(|c| shift_char(c, offset)).collect()
}

/// Shift a single character by an already-normalized offset in `[0, 26)`
#[inline]
fn shift_char(c: char, offset: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let position = c as u8 - base;
    char::from(base + (position + offset) % ALPHABET_LEN as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "Hello, World!",
        "The quick brown fox jumps over the lazy dog.",
        "MiXeD cAsE 123 with\ttabs\nand newlines",
        "café naïve – ünïcode stays",
        "!!!123",
    ];

    #[test]
    fn shift_forward_with_punctuation() {
        assert_eq!(apply_shift("abc, XYZ!", 1), "bcd, YZA!");
    }

    #[test]
    fn shift_wraps_at_alphabet_end() {
        assert_eq!(apply_shift("Zz", 1), "Aa");
        assert_eq!(apply_shift("Aa", -1), "Zz");
    }

    #[test]
    fn shift_negative_recovers_plaintext() {
        assert_eq!(apply_shift("KHOOR ZRUOG", -3), "HELLO WORLD");
        assert_eq!(apply_shift("khoor zruog", 23), "hello world");
    }

    #[test]
    fn shift_zero_is_identity() {
        for &text in SAMPLES {
            assert_eq!(apply_shift(text, 0), text);
            assert_eq!(apply_shift(text, 26), text);
            assert_eq!(apply_shift(text, -26), text);
        }
    }

    #[test]
    fn shift_is_invertible() {
        for &text in SAMPLES {
            for shift in -30..=30 {
                let encoded = apply_shift(text, shift);
                assert_eq!(
                    apply_shift(&encoded, -shift),
                    text,
                    "shift {shift} not inverted for {text:?}"
                );
            }
        }
    }

    #[test]
    fn shift_is_periodic() {
        for &text in SAMPLES {
            for shift in -26..=26 {
                let base = apply_shift(text, shift);
                assert_eq!(apply_shift(text, shift + 26), base);
                assert_eq!(apply_shift(text, shift - 26), base);
            }
        }
    }

    #[test]
    fn non_letters_keep_their_positions() {
        for &text in SAMPLES {
            for shift in [-25, -13, -1, 1, 7, 25] {
                let shifted = apply_shift(text, shift);
                assert_eq!(shifted.chars().count(), text.chars().count());

                for (original, out) in text.chars().zip(shifted.chars()) {
                    if original.is_ascii_alphabetic() {
                        assert!(out.is_ascii_alphabetic());
                        assert_eq!(original.is_ascii_uppercase(), out.is_ascii_uppercase());
                    } else {
                        assert_eq!(original, out);
                    }
                }
            }
        }
    }

    #[test]
    fn large_shifts_reduce_modulo_alphabet() {
        assert_eq!(apply_shift("abc", 27), "bcd");
        assert_eq!(apply_shift("abc", -27), "zab");
        assert_eq!(apply_shift("abc", 26 * 40 + 2), "cde");
    }
}
