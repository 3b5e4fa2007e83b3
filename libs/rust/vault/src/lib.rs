//! Vault client for the credential rotator.
//!
//! Provides the retrying HTTP transport, typed calls for the login, list,
//! read and write endpoints, and the secret value types passed between them.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod secrets;
pub mod transport;

pub use client::VaultClient;
pub use config::{VaultConfig, VaultEndpoints};
pub use error::{CredentialField, VaultError, VaultResult};
pub use provider::VaultApi;
pub use secrets::{Credential, SessionToken, VersionId};
pub use transport::{JsonObject, VaultTransport};
