//! Error type shared by the client, exporter, config and logging layers.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The discovery API answered with anything other than 200.
    #[error("API error {status}: {body}")]
    UpstreamRequestFailure { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid continuation link {link}: {reason}")]
    InvalidLink { link: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
