use crate::consts::ALPHABET_LEN;

/// Equivalent forward key in `0..26` for any integer shift.
#[inline]
pub fn normalize_key(key: i32) -> u8 {
    key.rem_euclid(ALPHABET_LEN as i32) as u8
}

/// Rotates every ASCII letter `key` places forward, wrapping within the
/// alphabet. Case is preserved and every other character is copied as-is.
///
/// Keys of any magnitude wrap fully: `shift("A", 52) == "A"`.
pub fn shift(text: &str, key: i32) -> String {
    let k = normalize_key(key);
    text.chars().map(|c| shift_char(c, k)).collect()
}

#[inline]
fn shift_char(c: char, k: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    (base + (c as u8 - base + k) % ALPHABET_LEN as u8) as char
}
