//! Error types and process exit codes for the credential rotator.

use crate::rotator::RotationStage;
use rust_common::ConfigError;
use std::process::ExitCode;
use thiserror::Error;
use vault_client::VaultError;

/// Exit code for failures without a dedicated code.
pub const EXIT_UNEXPECTED: u8 = 1;
/// Exit code for configuration errors.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code when the vault stayed unreachable.
pub const EXIT_NETWORK: u8 = 3;
/// Exit code for 4xx/5xx responses.
pub const EXIT_HTTP_STATUS: u8 = 4;
/// Exit code when login returned no client token.
pub const EXIT_MISSING_CREDENTIAL: u8 = 5;
/// Exit code when the source path had no versions.
pub const EXIT_NO_VERSIONS: u8 = 6;
/// Exit code when the fetched credential lacked a field.
pub const EXIT_INCOMPLETE_CREDENTIAL: u8 = 7;

/// Errors that end a rotator process.
#[derive(Error, Debug)]
pub enum RotatorError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The vault client could not be set up
    #[error("Vault client setup failed: {0}")]
    Setup(#[from] VaultError),

    /// A pipeline step failed
    #[error("Rotation failed after stage '{stage}': {source}")]
    Rotation {
        /// Last stage completed before the failure
        stage: RotationStage,
        /// The step's error
        #[source]
        source: VaultError,
    },
}

impl RotatorError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Setup(VaultError::InvalidConfig(_)) => EXIT_CONFIG,
            Self::Setup(_) => EXIT_UNEXPECTED,
            Self::Rotation { source, .. } => match source {
                VaultError::Network(_) => EXIT_NETWORK,
                VaultError::HttpStatus { .. } => EXIT_HTTP_STATUS,
                VaultError::MissingCredential(_) => EXIT_MISSING_CREDENTIAL,
                VaultError::NoVersionsFound(_) => EXIT_NO_VERSIONS,
                VaultError::IncompleteCredential { .. } => EXIT_INCOMPLETE_CREDENTIAL,
                VaultError::InvalidConfig(_) => EXIT_CONFIG,
                VaultError::Serialization(_) | VaultError::ClientBuild(_) => EXIT_UNEXPECTED,
            },
        }
    }
}

impl From<&RotatorError> for ExitCode {
    fn from(err: &RotatorError) -> Self {
        Self::from(err.exit_code())
    }
}
