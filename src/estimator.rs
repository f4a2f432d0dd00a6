use crate::alphabet::letter_index;
use crate::consts::{ALPHABET_LEN, MIN_CANDIDATES};
use crate::error::{SbResult, ShiftBreakError};
use crate::frequency::Distribution;
use crate::reference::ReferenceTable;
use serde::Serialize;
use tracing::debug;

/// Implied shifts are differences of two alphabet positions: -25..=25.
const MAX_SHIFT: i32 = ALPHABET_LEN as i32 - 1;
const SHIFT_SLOTS: usize = 2 * ALPHABET_LEN - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftVote {
    pub key: i32,
    pub votes: usize,
}

/// Ranked shift keys, most votes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCandidates {
    ranked: Vec<ShiftVote>,
    total_votes: usize,
    distinct_keys: usize,
}

impl KeyCandidates {
    /// Highest-voted key.
    pub fn best(&self) -> i32 {
        self.ranked[0].key
    }

    /// Second and third ranked keys.
    pub fn alternates(&self) -> (i32, i32) {
        (self.ranked[1].key, self.ranked[2].key)
    }

    pub fn keys(&self) -> Vec<i32> {
        self.ranked.iter().map(|v| v.key).collect()
    }

    pub fn ranked(&self) -> &[ShiftVote] {
        &self.ranked
    }

    /// One vote per letter of the ciphertext.
    pub fn total_votes(&self) -> usize {
        self.total_votes
    }

    /// Number of distinct shift values seen, including those not ranked.
    pub fn distinct_keys(&self) -> usize {
        self.distinct_keys
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[inline]
fn slot(shift: i32) -> usize {
    debug_assert!((-MAX_SHIFT..=MAX_SHIFT).contains(&shift));
    (shift + MAX_SHIFT) as usize
}

/// Votes for the shift that maps each ciphertext letter onto the reference
/// letter whose standard frequency is closest to the letter's observed
/// frequency, and returns the `count` most voted shifts.
///
/// Fewer than `count` keys are returned when fewer distinct shifts were
/// seen, as long as there are at least `MIN_CANDIDATES` of them.
///
/// Every letter occurrence casts one vote. Shifts are left un-normalized
/// (`reference - cipher`, in -25..=25). Equal vote counts keep the order in
/// which the shifts were first seen.
pub fn estimate_keys(
    ciphertext: &str,
    distribution: &Distribution,
    reference: &ReferenceTable,
    count: usize,
) -> SbResult<KeyCandidates> {
    if count < MIN_CANDIDATES {
        return Err(ShiftBreakError::Config(format!(
            "At least {} candidate keys are required, got {}",
            MIN_CANDIDATES, count
        )));
    }

    let mut votes = [0usize; SHIFT_SLOTS];
    let mut first_seen: Vec<i32> = Vec::with_capacity(SHIFT_SLOTS);
    let mut total_votes = 0usize;

    for cipher_idx in ciphertext.chars().filter_map(letter_index) {
        let observed = distribution.percentage(cipher_idx);
        let plain_idx = reference.closest_letter(observed);
        let shift = plain_idx as i32 - cipher_idx as i32;

        let s = slot(shift);
        if votes[s] == 0 {
            first_seen.push(shift);
        }
        votes[s] += 1;
        total_votes += 1;
    }

    if total_votes == 0 {
        return Err(ShiftBreakError::EmptyInput);
    }

    let distinct_keys = first_seen.len();
    if distinct_keys < MIN_CANDIDATES {
        return Err(ShiftBreakError::InsufficientVotes {
            found: distinct_keys,
            required: MIN_CANDIDATES,
        });
    }

    let mut ranked: Vec<ShiftVote> = first_seen
        .into_iter()
        .map(|key| ShiftVote {
            key,
            votes: votes[slot(key)],
        })
        .collect();

    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked.truncate(count);

    debug!(
        "Estimated keys {:?} from {} votes over {} distinct shifts",
        ranked.iter().map(|v| (v.key, v.votes)).collect::<Vec<_>>(),
        total_votes,
        distinct_keys
    );

    Ok(KeyCandidates {
        ranked,
        total_votes,
        distinct_keys,
    })
}
