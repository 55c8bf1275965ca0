//! Unified error type for the catalogue state layer.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::storage::StorageError;

/// Unified error type.
///
/// `NotFound` is kept apart from `Network` so a caller can tell "that name does
/// not exist" from "the catalogue could not be reached".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DexError {
    /// Transient remote failure.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The primary lookup named an unknown entry.
    #[error("entry \"{key}\" not found")]
    NotFound { key: String },

    /// Persistence failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A payload that could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Invalid input or configuration.
    #[error("{message}")]
    Client { message: String },
}

impl DexError {
    pub fn not_found(key: impl Into<String>) -> Self {
        DexError::NotFound { key: key.into() }
    }

    pub fn client(message: impl Into<String>) -> Self {
        DexError::Client {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DexError::Network(_) => ErrorCategory::Network,
            DexError::NotFound { .. } => ErrorCategory::NotFound,
            DexError::Storage(_) => ErrorCategory::Storage,
            DexError::Parse { .. } => ErrorCategory::Parse,
            DexError::Client { .. } => ErrorCategory::Client,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DexError::NotFound { .. })
    }

    /// Check if the user should be offered a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            DexError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Message suitable for an error banner.
    pub fn user_message(&self) -> String {
        match self {
            DexError::Network(err) => err.user_message(),
            DexError::NotFound { key } => format!("Entry \"{}\" not found.", key),
            DexError::Storage(_) => "Favorites could not be saved.".to_string(),
            DexError::Parse { .. } => {
                "Received unexpected data from the catalogue. Please try again.".to_string()
            }
            DexError::Client { message } => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DexError::Network(err) => err.error_code(),
            DexError::NotFound { .. } => "E_NOT_FOUND",
            DexError::Storage(err) => err.error_code(),
            DexError::Parse { .. } => "E_PARSE",
            DexError::Client { .. } => "E_CLIENT",
        }
    }
}

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        DexError::Parse {
            message: err.to_string(),
        }
    }
}
