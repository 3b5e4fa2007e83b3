//! Vault client configuration.

use crate::error::{VaultError, VaultResult};
use rust_common::{HttpConfig, RetryConfig};
use url::Url;

/// Fixed vault paths used by a rotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEndpoints {
    /// Path exchanging the password for a session token
    pub login: String,
    /// Path listing the source credential versions
    pub list: String,
    /// Base path of a single source version; the version id is appended
    pub get_entry: String,
    /// Destination path the credential is written to
    pub update: String,
}

impl VaultEndpoints {
    /// Create the endpoint set.
    #[must_use]
    pub fn new(
        login: impl Into<String>,
        list: impl Into<String>,
        get_entry: impl Into<String>,
        update: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            list: list.into(),
            get_entry: get_entry.into(),
            update: update.into(),
        }
    }

    /// Path of one version under the retrieval base path.
    #[must_use]
    pub fn entry_path(&self, version: &str) -> String {
        format!("{}/{version}", self.get_entry.trim_end_matches('/'))
    }
}

/// Vault client configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Base address every path is resolved against
    pub addr: Url,
    /// Login, list, retrieval and destination paths
    pub endpoints: VaultEndpoints,
    /// HTTP client settings
    pub http: HttpConfig,
    /// Transport retry settings
    pub retry: RetryConfig,
}

impl VaultConfig {
    /// Create a new configuration with default HTTP and retry settings.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] if `addr` is not an absolute URL.
    pub fn new(addr: &str, endpoints: VaultEndpoints) -> VaultResult<Self> {
        let addr = Url::parse(addr)
            .map_err(|e| VaultError::InvalidConfig(format!("vault address {addr:?}: {e}")))?;
        if addr.cannot_be_a_base() {
            return Err(VaultError::InvalidConfig(format!(
                "vault address {addr} cannot be used as a base URL"
            )));
        }

        Ok(Self {
            addr,
            endpoints,
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
        })
    }

    /// Set HTTP client settings.
    #[must_use]
    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Set transport retry settings.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
