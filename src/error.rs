//! Error handling for the career compass application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerCompassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog missing or malformed. Fatal: analysis cannot proceed
    /// without a catalog.
    #[error("Catalog load error: {0}")]
    DataLoad(String),

    /// Uploaded document could not be decoded. Recoverable: callers
    /// fall back to manually entered skills.
    #[error("Document parse error: {0}")]
    DocumentParse(String),

    /// No skills selected before analysis. Rejected as a precondition,
    /// never scored as a near-zero match.
    #[error("No skills selected: add at least one skill before running analysis")]
    EmptySelection,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CareerCompassError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerCompassError {
    fn from(err: anyhow::Error) -> Self {
        CareerCompassError::InvalidInput(err.to_string())
    }
}
