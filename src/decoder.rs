use crate::consts::DEFAULT_CANDIDATES;
use crate::error::SbResult;
use crate::estimator::{estimate_keys, KeyCandidates};
use crate::frequency::{compute_frequency, Distribution};
use crate::reference::ReferenceTable;
use crate::shift::shift;
use serde::Serialize;
use tracing::debug;

/// Outcome of breaking one ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Uppercased input the analysis ran on.
    pub ciphertext: String,
    pub best_key: i32,
    /// `ciphertext` shifted by `best_key`.
    pub decoded: String,
    pub alternate_keys: (i32, i32),
    pub candidates: KeyCandidates,
    pub distribution: Distribution,
}

/// Frequency-analysis decoder bound to one reference table.
#[derive(Debug, Clone)]
pub struct Decoder {
    reference: ReferenceTable,
    candidates: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(ReferenceTable::english())
    }
}

impl Decoder {
    pub fn new(reference: ReferenceTable) -> Self {
        Self {
            reference,
            candidates: DEFAULT_CANDIDATES,
        }
    }

    /// Number of ranked keys to produce. Values below 3 make
    /// [`Decoder::evaluate`] fail with a configuration error.
    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn evaluate(&self, ciphertext: &str) -> SbResult<Evaluation> {
        let ciphertext = ciphertext.to_ascii_uppercase();
        let distribution = compute_frequency(&ciphertext)?;
        let candidates =
            estimate_keys(&ciphertext, &distribution, &self.reference, self.candidates)?;

        let best_key = candidates.best();
        let decoded = shift(&ciphertext, best_key);
        debug!(
            "Decoded {} letters with key {}",
            distribution.total(),
            best_key
        );

        Ok(Evaluation {
            best_key,
            decoded,
            alternate_keys: candidates.alternates(),
            candidates,
            distribution,
            ciphertext,
        })
    }
}

/// Breaks `ciphertext` against the built-in English table.
pub fn evaluate(ciphertext: &str) -> SbResult<Evaluation> {
    Decoder::default().evaluate(ciphertext)
}
