//! Error types for brandcheck

use thiserror::Error;

/// Result type alias for brandcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a single tool invocation
///
/// Every variant is fatal for the invocation that produced it. Nothing in the
/// adapter retries on any of them.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any request was sent
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Argument that failed validation (e.g. `name`, `names[1]`)
        field: String,
        /// What was expected
        message: String,
    },

    /// Collaborator API answered with a non-success status
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, empty when it could not be read
        body: String,
    },

    /// Request could not be sent or its response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Success status, but the body is missing something the tool needs
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised locally, before any network I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("name", "expected lowercase letters");
        assert_eq!(err.to_string(), "Invalid name: expected lowercase letters");

        let err = Error::Api {
            status: 429,
            body: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: slow down");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::validation("names", "too few").is_validation());
        assert!(!Error::Transport("reset".to_string()).is_validation());

        let err = Error::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(Error::Config("bad".to_string()).status(), None);
    }
}
