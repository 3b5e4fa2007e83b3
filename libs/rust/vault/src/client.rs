//! Vault HTTP client for the login, list, read and write endpoints.

use crate::{
    config::{VaultConfig, VaultEndpoints},
    error::{VaultError, VaultResult},
    provider::VaultApi,
    secrets::{Credential, EntryResponse, ListResponse, LoginResponse, SessionToken, VersionId},
    transport::{JsonObject, VaultTransport},
};
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Header carrying the session token.
pub const VAULT_TOKEN_HEADER: &str = "x-vault-token";

/// Vault client bound to one set of endpoints.
#[derive(Debug, Clone)]
pub struct VaultClient {
    transport: VaultTransport,
    endpoints: VaultEndpoints,
}

impl VaultClient {
    /// Create a client with a transport built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &VaultConfig) -> VaultResult<Self> {
        Ok(Self::with_transport(
            VaultTransport::from_config(config)?,
            config.endpoints.clone(),
        ))
    }

    /// Create a client over an existing transport.
    #[must_use]
    pub const fn with_transport(transport: VaultTransport, endpoints: VaultEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    fn token_headers(token: &SessionToken) -> VaultResult<HeaderMap> {
        let value = token
            .header_value()
            .map_err(|_| VaultError::MissingCredential("session token is not a valid header value".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(VAULT_TOKEN_HEADER), value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn decode<T: DeserializeOwned>(body: JsonObject) -> VaultResult<T> {
        Ok(serde_json::from_value(serde_json::Value::Object(body))?)
    }
}

#[async_trait]
impl VaultApi for VaultClient {
    fn endpoints(&self) -> &VaultEndpoints {
        &self.endpoints
    }

    #[instrument(skip_all, fields(path = %self.endpoints.login))]
    async fn login(&self, password: Option<&SecretString>) -> VaultResult<LoginResponse> {
        let body = serde_json::json!({
            "password": password.map(|p| p.expose_secret()),
        });

        let response = self
            .transport
            .request(Method::POST, &self.endpoints.login, None, Some(&body))
            .await?;

        Self::decode(response)
    }

    #[instrument(skip_all, fields(path = %self.endpoints.list))]
    async fn list_versions(&self, token: &SessionToken) -> VaultResult<ListResponse> {
        let headers = Self::token_headers(token)?;
        let method = Method::from_bytes(b"LIST")
            .map_err(|e| VaultError::InvalidConfig(format!("LIST method: {e}")))?;

        let response = self
            .transport
            .request(method, &self.endpoints.list, Some(&headers), None)
            .await?;

        Self::decode(response)
    }

    #[instrument(skip_all, fields(version = %version))]
    async fn read_version(&self, token: &SessionToken, version: &VersionId) -> VaultResult<EntryResponse> {
        let headers = Self::token_headers(token)?;
        let path = self.endpoints.entry_path(version.as_str());
        debug!(%path, "Reading credential version");

        let response = self
            .transport
            .request(Method::GET, &path, Some(&headers), None)
            .await?;

        Self::decode(response)
    }

    #[instrument(skip_all, fields(path = %self.endpoints.update))]
    async fn write_credential(&self, token: &SessionToken, credential: &Credential) -> VaultResult<()> {
        let headers = Self::token_headers(token)?;
        let body = credential.to_body();

        self.transport
            .request(Method::POST, &self.endpoints.update, Some(&headers), Some(&body))
            .await?;

        Ok(())
    }
}
