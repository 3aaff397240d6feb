//! Static bidirectional Morse symbol table.
//!
//! One forward mapping from canonical (uppercase) character to Morse code,
//! and its inverse, built by inverting the forward table. The table covers
//! the 26 letters, the 10 digits, the space character (which maps to the
//! word separator `/`), and 18 punctuation marks.
//!
//! # Invariant
//!
//! The forward mapping is injective: no two characters share a code. The
//! inverse is therefore well-defined and total over the forward value set.
//! Both lookup maps are built once behind `OnceLock` and never mutated, so
//! they are safe to share across threads without synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Forward table: canonical character paired with its Morse code.
const FORWARD: &[(char, &str)] = &[
    // Letters
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    // Digits
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    // Space becomes the word separator
    (' ', "/"),
    // Punctuation
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static FORWARD_MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
static INVERSE_MAP: OnceLock<HashMap<&'static str, char>> = OnceLock::new();

fn forward_map() -> &'static HashMap<char, &'static str> {
    FORWARD_MAP.get_or_init(|| FORWARD.iter().copied().collect())
}

fn inverse_map() -> &'static HashMap<&'static str, char> {
    INVERSE_MAP.get_or_init(|| FORWARD.iter().map(|&(c, code)| (code, c)).collect())
}

/// Look up the Morse code for a canonical (uppercase) character.
///
/// Returns `None` for characters outside the table; the caller decides how
/// to substitute.
pub fn code_for(c: char) -> Option<&'static str> {
    forward_map().get(&c).copied()
}

/// Look up the source character for a Morse token.
///
/// Total over every code the forward table produces, including the `/`
/// word separator (which maps back to a space).
pub fn char_for(token: &str) -> Option<char> {
    inverse_map().get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        // 26 letters + 10 digits + space + 18 punctuation marks
        assert_eq!(FORWARD.len(), 55);
    }

    #[test]
    fn test_no_duplicate_characters() {
        assert_eq!(forward_map().len(), FORWARD.len());
    }

    #[test]
    fn test_injective_codes() {
        // Inverting loses nothing, so no two characters share a code
        assert_eq!(inverse_map().len(), FORWARD.len());
    }

    #[test]
    fn test_forward_lookups() {
        assert_eq!(code_for('A'), Some(".-"));
        assert_eq!(code_for('Z'), Some("--.."));
        assert_eq!(code_for('0'), Some("-----"));
        assert_eq!(code_for(' '), Some("/"));
        assert_eq!(code_for('@'), Some(".--.-."));
        assert_eq!(code_for('$'), Some("...-..-"));
    }

    #[test]
    fn test_inverse_lookups() {
        assert_eq!(char_for("..."), Some('S'));
        assert_eq!(char_for("/"), Some(' '));
        assert_eq!(char_for(".-.-.-"), Some('.'));
        assert_eq!(char_for("----."), Some('9'));
    }

    #[test]
    fn test_lowercase_not_canonical() {
        // The table is defined over uppercase forms only
        assert_eq!(code_for('a'), None);
    }

    #[test]
    fn test_round_trip_every_entry() {
        for &(c, code) in FORWARD {
            assert_eq!(code_for(c), Some(code));
            assert_eq!(char_for(code), Some(c));
        }
    }
}
