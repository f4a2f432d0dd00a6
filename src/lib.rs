pub mod alphabet;
pub mod command;
pub mod config;
pub mod consts;
pub mod decoder;
pub mod error;
pub mod estimator;
pub mod frequency;
pub mod reference;
pub mod session;
pub mod shift;
// cmd and reports belong to the binary crate (main.rs).

pub use decoder::{evaluate, Decoder, Evaluation};
pub use error::{SbResult, ShiftBreakError};
pub use estimator::{estimate_keys, KeyCandidates, ShiftVote};
pub use frequency::{compute_frequency, Distribution};
pub use reference::ReferenceTable;
pub use shift::{normalize_key, shift};
