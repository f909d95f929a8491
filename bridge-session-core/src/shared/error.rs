//! Error handling for the session core
//!
//! This module defines the error types used throughout the session core.
//! An unsupported wallet network is not an error: it is reported as a
//! rejected login outcome. Errors here are failures of collaborators.

use thiserror::Error;

/// Session error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Wallet provider error: {0}")]
    Provider(String),
}

impl SessionError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a wallet provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for SessionError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_creation() {
        let config_error = SessionError::config("Invalid configuration");
        let provider_error = SessionError::provider("Extension not reachable");
        let storage_error = SessionError::storage("Disk full");

        assert!(matches!(config_error, SessionError::Config(_)));
        assert!(matches!(provider_error, SessionError::Provider(_)));
        assert!(matches!(storage_error, SessionError::Storage(_)));
    }

    #[test]
    fn test_error_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let session_error: SessionError = io_error.into();
        assert!(matches!(session_error, SessionError::Storage(_)));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let session_error: SessionError = json_error.into();
        assert!(matches!(session_error, SessionError::Storage(_)));

        let config_error = config::ConfigError::Message("missing field".to_string());
        let session_error: SessionError = config_error.into();
        assert!(matches!(session_error, SessionError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let error = SessionError::provider("getNetwork timed out");
        let display = format!("{}", error);

        assert!(display.contains("Wallet provider error"));
        assert!(display.contains("getNetwork timed out"));
    }
}
