//! Error types for the Mindwell application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Mindwell application.
///
/// The variants follow the failure taxonomy of the chat coach: a missing
/// API key is caught before any network attempt, transport and provider
/// failures are kept distinct, and a well-formed HTTP success with no
/// usable choices is still a failure. Nothing here is retried
/// automatically; recovery is always user-initiated.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum MindwellError {
    /// Required setting absent or unusable (e.g. empty API key).
    /// Signaled pre-flight, before any request is issued.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/connectivity failure while talking to a provider.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx provider response, with the provider's own error text
    /// when the body was parseable.
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// 2xx response whose body is missing the expected choices.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Rejected user input (dates, times, answer codes, empty messages).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (file system operations)
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MindwellError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this failure came back from a provider round trip
    /// (as opposed to being caught locally before the request).
    pub fn is_provider_side(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Provider { .. } | Self::MalformedResponse(_)
        )
    }
}

impl From<std::io::Error> for MindwellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for MindwellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A type alias for `Result<T, MindwellError>`.
pub type Result<T> = std::result::Result<T, MindwellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_status() {
        let err = MindwellError::Provider {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "Provider error (429): rate limited");
    }

    #[test]
    fn config_errors_are_not_provider_side() {
        assert!(MindwellError::config("no key").is_config());
        assert!(!MindwellError::config("no key").is_provider_side());
        assert!(MindwellError::transport("refused").is_provider_side());
    }
}
