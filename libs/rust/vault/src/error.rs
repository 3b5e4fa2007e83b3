//! Vault error types using thiserror 2.0.
//!
//! Only [`VaultError::Network`] is transient. HTTP error statuses and
//! malformed payloads fail the call on the first attempt.

use rust_common::Retryable;
use std::fmt;
use thiserror::Error;

/// A required field of a [`crate::Credential`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// The `username` field
    Username,
    /// The `password` field
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Vault-specific errors.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Connection refused, DNS failure, timeout or a broken response stream
    #[error("Vault unreachable: {0}")]
    Network(String),

    /// Vault answered with a 4xx or 5xx status
    #[error("Vault returned HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Login succeeded but no usable client token came back
    #[error("No client token returned by {0}")]
    MissingCredential(String),

    /// Listing succeeded but returned no version identifiers
    #[error("No versions found at {0}")]
    NoVersionsFound(String),

    /// The fetched credential lacks a required field
    #[error("Credential at {path} is missing {field}")]
    IncompleteCredential {
        /// Path the credential was read from
        path: String,
        /// First missing or empty field
        field: CredentialField,
    },

    /// Response body is not a JSON object of the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Result type for Vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

impl Retryable for VaultError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl VaultError {
    /// Create a network error from a transport failure, including its causes.
    #[must_use]
    pub fn network(err: &reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Network(message)
    }

    /// Create a missing credential error.
    #[must_use]
    pub fn missing_credential(path: impl Into<String>) -> Self {
        Self::MissingCredential(path.into())
    }

    /// Create a no versions found error.
    #[must_use]
    pub fn no_versions(path: impl Into<String>) -> Self {
        Self::NoVersionsFound(path.into())
    }

    /// Create an incomplete credential error.
    #[must_use]
    pub fn incomplete(path: impl Into<String>, field: CredentialField) -> Self {
        Self::IncompleteCredential {
            path: path.into(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VaultError::HttpStatus {
            status: 503,
            body: "sealed".to_string(),
        };
        assert_eq!(err.to_string(), "Vault returned HTTP 503: sealed");

        let err = VaultError::incomplete("/v1/source/2024", CredentialField::Password);
        assert_eq!(err.to_string(), "Credential at /v1/source/2024 is missing password");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(VaultError::Network("connection refused".to_string()).is_retryable());
        assert!(
            !VaultError::HttpStatus {
                status: 500,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!VaultError::missing_credential("/v1/auth/login").is_retryable());
        assert!(!VaultError::no_versions("/v1/source").is_retryable());
        assert!(!VaultError::incomplete("/v1/source/1", CredentialField::Username).is_retryable());
    }
}
