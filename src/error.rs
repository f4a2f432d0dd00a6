use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Insufficient data to estimate a shift key: ciphertext contains no letters")]
    EmptyInput,

    #[error(
        "Insufficient data to estimate a shift key: found {found} distinct key(s), need {required}"
    )]
    InsufficientVotes { found: usize, required: usize },

    #[error("Reference Table Error: {0}")]
    Reference(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SbResult<T> = Result<T, ShiftBreakError>;
