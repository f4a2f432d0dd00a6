use crate::alphabet::letter_index;
use crate::consts::ALPHABET_LEN;
use crate::error::{SbResult, ShiftBreakError};
use serde::Serialize;

/// Observed letter frequencies of a ciphertext.
///
/// All 26 letters are always present; letters absent from the text are 0%.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    counts: [usize; ALPHABET_LEN],
    total: usize,
    percentages: [f64; ALPHABET_LEN],
}

impl Distribution {
    /// Percentage of letter `index` (0 = A).
    pub fn percentage(&self, index: usize) -> f64 {
        self.percentages[index]
    }

    /// Percentage of `c`, or `None` when `c` is not a letter.
    pub fn percentage_of(&self, c: char) -> Option<f64> {
        letter_index(c).map(|i| self.percentages[i])
    }

    pub fn percentages(&self) -> &[f64; ALPHABET_LEN] {
        &self.percentages
    }

    pub fn count(&self, index: usize) -> usize {
        self.counts[index]
    }

    /// Number of letters counted.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Counts letters case-insensitively and converts counts to percentages.
///
/// Text without a single ASCII letter has no distribution and is rejected
/// with [`ShiftBreakError::EmptyInput`].
pub fn compute_frequency(ciphertext: &str) -> SbResult<Distribution> {
    let mut counts = [0usize; ALPHABET_LEN];
    let mut total = 0usize;

    for idx in ciphertext.chars().filter_map(letter_index) {
        counts[idx] += 1;
        total += 1;
    }

    if total == 0 {
        return Err(ShiftBreakError::EmptyInput);
    }

    let mut percentages = [0.0; ALPHABET_LEN];
    for (pct, &count) in percentages.iter_mut().zip(counts.iter()) {
        *pct = count as f64 / total as f64 * 100.0;
    }

    Ok(Distribution {
        counts,
        total,
        percentages,
    })
}
