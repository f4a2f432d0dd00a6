/// Number of letters in the English alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Minimum number of ranked keys an estimation must produce:
/// the best guess plus two alternates.
pub const MIN_CANDIDATES: usize = 3;

/// Default number of ranked keys reported by the decoder.
pub const DEFAULT_CANDIDATES: usize = MIN_CANDIDATES;

/// Tolerance used when checking that a frequency table sums to 100%.
pub const PERCENT_SUM_TOLERANCE: f64 = 0.5;
