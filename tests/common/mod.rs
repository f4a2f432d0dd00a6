#![allow(dead_code)]

use shiftbreak::shift::shift;

/// Opening of "A Tale of Two Cities", roughly 950 characters.
pub const TWO_CITIES: &str = include_str!("../data/two_cities.txt");

/// Encrypts the sample corpus with `key`, uppercased the way the decoder sees it.
pub fn encrypted_corpus(key: i32) -> String {
    shift(&TWO_CITIES.to_ascii_uppercase(), key)
}

/// Whether two shift keys are congruent modulo 26.
pub fn same_key(a: i32, b: i32) -> bool {
    (a - b).rem_euclid(26) == 0
}
