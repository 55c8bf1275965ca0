//! Key-value persistence errors.

use thiserror::Error;

/// Failures of the persistence collaborator.
///
/// None of these reach a screen: a failed read hydrates an empty favorites
/// set and a failed write is dropped after logging.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("failed to read key '{key}': {message}")]
    ReadFailed { key: String, message: String },

    #[error("failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    #[error("malformed value under '{key}': {message}")]
    Malformed { key: String, message: String },

    #[error("no data directory available")]
    NoDataDirectory,
}

impl StorageError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::ReadFailed { .. } => "E_STORE_READ",
            StorageError::WriteFailed { .. } => "E_STORE_WRITE",
            StorageError::Malformed { .. } => "E_STORE_MALFORMED",
            StorageError::NoDataDirectory => "E_STORE_NODIR",
        }
    }
}
