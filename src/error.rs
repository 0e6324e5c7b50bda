//! Error handling for the resume matcher

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not extract text: {0}")]
    Extraction(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Sample data not found: {}", .0.display())]
    SampleDataMissing(PathBuf),

    #[error("Embedding provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;
