//! Classical substitution ciphers: Caesar and Vigenère.
//!
//! These are the only transforms implemented by hand; everything else in the
//! playground delegates to the crypto provider.  Both ciphers share the same
//! policy: Latin letters are substituted with their case preserved, every
//! other character passes through unchanged.

use std::{error, fmt};

/// Shift applied when a Caesar request carries no usable key.
pub const DEFAULT_SHIFT: i32 = 3;

/// Keyword applied when a Vigenère request carries no key.
pub const DEFAULT_KEYWORD: &str = "key";

/// A rejected Vigenère keyword.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeywordError {
    Empty,
    NonAlphabetic(char),
}

impl fmt::Display for KeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordError::Empty => write!(f, "keyword must contain at least one letter"),
            KeywordError::NonAlphabetic(c) => {
                write!(f, "keyword must contain only letters, found {:?}", c)
            }
        }
    }
}

impl error::Error for KeywordError {}

/// Applies a single Caesar shift to one character.  The double modulo-add
/// keeps the result in range for negative shifts.
fn shift_char(c: char, shift: i32) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    let offset = (c as u8 - base) as i32;
    let shifted = ((offset + shift) % 26 + 26) % 26;
    (base + shifted as u8) as char
}

/// Caesar transform.  Decryption is `caesar(text, -shift)`; total for every
/// `i32` shift.
pub fn caesar(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Validates a keyword and reduces it to letter values in `0..26`.
fn keyword_values(keyword: &str) -> Result<Vec<i32>, KeywordError> {
    if keyword.is_empty() {
        return Err(KeywordError::Empty);
    }
    keyword
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok((c.to_ascii_uppercase() as u8 - b'A') as i32)
            } else {
                Err(KeywordError::NonAlphabetic(c))
            }
        })
        .collect()
}

/// Shared Vigenère walk.  The keyword index is advanced only when the input
/// character is alphabetic, so punctuation never consumes a keyword position.
fn vigenere(text: &str, keyword: &str, sign: i32) -> Result<String, KeywordError> {
    let values = keyword_values(keyword)?;
    let mut index = 0usize;
    let ret = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = sign * values[index % values.len()];
                index += 1;
                shift_char(c, shift)
            } else {
                c
            }
        })
        .collect();
    Ok(ret)
}

/// Vigenère encode: result value is `(text + key) mod 26` per letter.
///
/// The keyword must be non-empty and all letters; callers that want the
/// lenient behavior substitute [`DEFAULT_KEYWORD`] before calling.
pub fn vigenere_encode(text: &str, keyword: &str) -> Result<String, KeywordError> {
    vigenere(text, keyword, 1)
}

/// Vigenère decode: result value is `(text - key + 26) mod 26` per letter.
pub fn vigenere_decode(text: &str, keyword: &str) -> Result<String, KeywordError> {
    vigenere(text, keyword, -1)
}

#[cfg(test)]
mod tests {
    use super::{caesar, vigenere_decode, vigenere_encode, KeywordError};

    #[test]
    fn caesar_shifts_forward() {
        assert_eq!("DEF", caesar("ABC", 3));
    }

    #[test]
    fn caesar_wraps_around() {
        assert_eq!("ABC", caesar("XYZ", 3));
        assert_eq!("xyz", caesar("abc", -3));
    }

    #[test]
    fn caesar_preserves_case_and_punctuation() {
        assert_eq!("Dwwdfn dw Gdzq!", caesar("Attack at Dawn!", 3));
    }

    #[test]
    fn caesar_passes_non_alphabetic_through() {
        for shift in [-53, -1, 0, 5, 26, 117] {
            assert_eq!("1234 ,.!? \t\u{e9}\u{4e16}", caesar("1234 ,.!? \t\u{e9}\u{4e16}", shift));
        }
    }

    #[test]
    fn caesar_zero_shift_is_identity() {
        assert_eq!("Attack at Dawn!", caesar("Attack at Dawn!", 0));
    }

    #[test]
    fn caesar_empty_text_yields_empty_output() {
        assert_eq!("", caesar("", 7));
    }

    #[test]
    fn caesar_is_periodic() {
        let text = "The quick brown fox jumps over the lazy dog";
        for shift in -30..30 {
            assert_eq!(caesar(text, shift), caesar(text, shift + 26));
        }
    }

    #[test]
    fn caesar_roundtrips_all_letters() {
        let letters: String =
            ('A'..='Z').chain('a'..='z').collect();
        for shift in -60..60 {
            let encrypted = caesar(&letters, shift);
            assert_eq!(letters, caesar(&encrypted, -shift));
        }
    }

    #[test]
    fn vigenere_encodes_reference_vector() {
        let actual = vigenere_encode("ATTACKATDAWN", "LEMON").expect("should encode");
        assert_eq!("LXFOPVEFRNHR", actual);
    }

    #[test]
    fn vigenere_decodes_reference_vector() {
        let actual = vigenere_decode("LXFOPVEFRNHR", "LEMON").expect("should decode");
        assert_eq!("ATTACKATDAWN", actual);
    }

    #[test]
    fn vigenere_preserves_case() {
        let actual = vigenere_encode("Attack at Dawn!", "lemon").expect("should encode");
        assert_eq!("Lxfopv ef Rnhr!", actual);
    }

    #[test]
    fn vigenere_skips_non_alphabetic_without_consuming_keyword() {
        // 'a' and 'b' must use keyword positions 0 and 1; the digit in
        // between does not advance the index.
        let with_digit = vigenere_encode("a1b", "xy").expect("should encode");
        let without_digit = vigenere_encode("ab", "xy").expect("should encode");
        assert_eq!("x1z", with_digit);
        assert_eq!("xz", without_digit);
    }

    #[test]
    fn vigenere_roundtrips() {
        let keyword = "fortification";
        for text in ["", "defend the east wall of the castle", "Mixed CASE, with 123 digits."] {
            let encoded = vigenere_encode(text, keyword).expect("should encode");
            let decoded = vigenere_decode(&encoded, keyword).expect("should decode");
            assert_eq!(text, decoded);
        }
    }

    #[test]
    fn vigenere_rejects_empty_keyword() {
        assert_eq!(Err(KeywordError::Empty), vigenere_encode("attack", ""));
        assert_eq!(Err(KeywordError::Empty), vigenere_decode("attack", ""));
    }

    #[test]
    fn vigenere_rejects_non_alphabetic_keyword() {
        assert_eq!(Err(KeywordError::NonAlphabetic('3')), vigenere_encode("attack", "k3y"));
    }
}
