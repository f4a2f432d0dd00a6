use crate::consts::ALPHABET_LEN;

/// Position of an ASCII letter in the alphabet (A/a = 0 .. Z/z = 25).
/// Anything else, including non-ASCII letters, is not part of the alphabet.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter at `index`. Callers guarantee `index < 26`.
#[inline]
pub fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'A' + index as u8) as char
}

/// Iterates the canonical A-Z order.
pub fn letters() -> impl Iterator<Item = char> {
    (0..ALPHABET_LEN).map(letter_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_is_case_insensitive() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('z'), Some(25));
    }

    #[test]
    fn test_non_ascii_letters_are_rejected() {
        assert_eq!(letter_index('É'), None);
        assert_eq!(letter_index('ß'), None);
        assert_eq!(letter_index('7'), None);
        assert_eq!(letter_index(' '), None);
    }

    #[test]
    fn test_letters_canonical_order() {
        let s: String = letters().collect();
        assert_eq!(s, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
