//! Error types for statement extraction

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors raised by the extraction engine and its configuration layer.
///
/// Only `MalformedNumber` is produced while scanning a statement, and it is
/// always absorbed by the caller (the offending line is dropped).
#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Malformed number '{input}': {reason}")]
    MalformedNumber { input: String, reason: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config format: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl StatementError {
    pub fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedNumber {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
