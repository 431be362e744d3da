use thiserror::Error;

/// Errors produced while turning a bibliography into a publication page
#[derive(Error, Debug)]
pub enum BibHtmlError {
    #[error("Field '{field}' of entry '{key}' must be a plain string")]
    InvalidField { key: String, field: String },

    #[error("Line width must be greater than zero")]
    InvalidWrapWidth,

    #[error("Invalid record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Failed to parse venue configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BibHtmlError>;
