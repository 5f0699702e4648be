use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrikelineError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid pin number {0} (expected 1-10)")]
    InvalidPin(u8),

    #[error("Invalid Throw: {0}")]
    Throw(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type SlResult<T> = Result<T, StrikelineError>;
