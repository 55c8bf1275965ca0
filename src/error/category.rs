//! Error category classification.
//!
//! Categories drive the two decisions a screen has to make about a failure:
//! whether to offer a retry affordance, and which message to show.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transient remote failure (connection, timeout, 5xx, undecodable body).
    /// Never retried automatically; the user may retry.
    Network,

    /// The primary lookup named an entry the catalogue does not know.
    NotFound,

    /// Key-value persistence failure. Recovered locally, never surfaced.
    Storage,

    /// A payload could not be parsed into the expected shape.
    Parse,

    /// Programming or configuration error on our side.
    Client,
}

impl ErrorCategory {
    /// Returns true if the user should be offered a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Client => "client",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_network_is_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(!ErrorCategory::NotFound.is_retryable());
        assert!(!ErrorCategory::Storage.is_retryable());
        assert!(!ErrorCategory::Parse.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ErrorCategory::NotFound.to_string(), "not_found");
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
    }
}
