use crate::alphabet::{letter_at, letter_index};
use crate::consts::{ALPHABET_LEN, PERCENT_SUM_TOLERANCE};
use crate::error::{SbResult, ShiftBreakError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Standard English single-letter frequencies in percent, A through Z.
/// Figures from the Wikipedia article on letter frequency.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_LEN] = [
    8.167,  // A
    1.492,  // B
    2.782,  // C
    4.253,  // D
    12.702, // E
    2.228,  // F
    2.015,  // G
    6.094,  // H
    6.966,  // I
    0.153,  // J
    0.772,  // K
    4.025,  // L
    2.406,  // M
    6.749,  // N
    7.507,  // O
    1.929,  // P
    0.095,  // Q
    5.987,  // R
    6.327,  // S
    9.056,  // T
    2.758,  // U
    0.978,  // V
    2.360,  // W
    0.150,  // X
    1.974,  // Y
    0.074,  // Z
];

/// Expected letter frequencies of the plaintext language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTable {
    percentages: [f64; ALPHABET_LEN],
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::english()
    }
}

impl ReferenceTable {
    pub const fn english() -> Self {
        Self {
            percentages: ENGLISH_LETTER_FREQUENCIES,
        }
    }

    pub fn from_percentages(percentages: [f64; ALPHABET_LEN]) -> SbResult<Self> {
        for (i, &p) in percentages.iter().enumerate() {
            if !p.is_finite() || p < 0.0 {
                return Err(ShiftBreakError::Reference(format!(
                    "Letter '{}' has invalid percentage {}",
                    letter_at(i),
                    p
                )));
            }
        }

        let sum: f64 = percentages.iter().sum();
        if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
            warn!("Reference table sums to {:.3}%, expected ~100%", sum);
        }

        Ok(Self { percentages })
    }

    pub fn percentages(&self) -> &[f64; ALPHABET_LEN] {
        &self.percentages
    }

    pub fn percentage(&self, index: usize) -> f64 {
        self.percentages[index]
    }

    /// Index of the letter whose reference percentage is numerically nearest
    /// to `observed`. Exact ties go to the earliest letter in A-Z order.
    pub fn closest_letter(&self, observed: f64) -> usize {
        let mut best = 0;
        let mut best_diff = f64::INFINITY;
        for (i, &p) in self.percentages.iter().enumerate() {
            let diff = (p - observed).abs();
            if diff < best_diff {
                best = i;
                best_diff = diff;
            }
        }
        best
    }

    /// Reads `letter,percentage` rows. A leading header row is skipped.
    /// Every letter must appear exactly once.
    pub fn load_from_reader<R: Read>(reader: R) -> SbResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut percentages = [0.0; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let idx = match single_letter(&record[0]) {
                Some(idx) => idx,
                None if row == 0 => continue,
                None => {
                    return Err(ShiftBreakError::Reference(format!(
                        "Row {}: '{}' is not a single letter",
                        row + 1,
                        &record[0]
                    )))
                }
            };

            if record.len() < 2 {
                return Err(ShiftBreakError::Reference(format!(
                    "Row {} needs 'letter,percentage'",
                    row + 1
                )));
            }

            let pct: f64 = record[1].parse().map_err(|_| {
                ShiftBreakError::Reference(format!(
                    "Row {}: '{}' is not a number",
                    row + 1,
                    &record[1]
                ))
            })?;

            if seen[idx] {
                return Err(ShiftBreakError::Reference(format!(
                    "Letter '{}' listed more than once",
                    letter_at(idx)
                )));
            }
            seen[idx] = true;
            percentages[idx] = pct;
        }

        let missing: String = seen
            .iter()
            .enumerate()
            .filter(|&(_, &s)| !s)
            .map(|(i, _)| letter_at(i))
            .collect();
        if !missing.is_empty() {
            return Err(ShiftBreakError::Reference(format!(
                "Missing letters: {}",
                missing
            )));
        }

        Self::from_percentages(percentages)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let path = path.as_ref();
        info!("Loading reference table from {:?}", path);
        let file = File::open(path)?;
        Self::load_from_reader(file)
    }
}

fn single_letter(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => letter_index(c),
        _ => None,
    }
}
