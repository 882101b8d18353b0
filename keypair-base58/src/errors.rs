use thiserror::Error;

pub type KeypairResult<T> = std::result::Result<T, KeypairError>;

#[derive(Debug, Error)]
pub enum KeypairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("List literal error: {0}")]
    Literal(#[from] json5::Error),

    #[error("Invalid integer '{0}': {1}")]
    InvalidInteger(String, std::num::ParseIntError),

    #[error("Invalid integer '{0}'")]
    NonIntegerValue(f64),

    #[error("Expected 32 or 64 integers, got {0}")]
    InvalidLength(usize),

    #[error("All list items must be in 0-255 range")]
    ValueOutOfRange,
}
