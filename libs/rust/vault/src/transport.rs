//! Retrying HTTP transport shared by every vault call.
//!
//! A request is resolved against the configured base address, sent, and its
//! body decoded into a JSON object. Connectivity failures are retried under
//! the configured [`RetryPolicy`]; 4xx/5xx statuses are returned at once.

use crate::config::VaultConfig;
use crate::error::{VaultError, VaultResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use rust_common::{RetryPolicy, build_http_client};
use serde_json::{Map, Value};
use tracing::{debug, instrument};
use url::Url;

/// Decoded response body.
pub type JsonObject = Map<String, Value>;

/// HTTP transport with a uniform retry policy.
#[derive(Debug, Clone)]
pub struct VaultTransport {
    http: Client,
    base: Url,
    retry: RetryPolicy,
}

impl VaultTransport {
    /// Create a transport from its parts.
    #[must_use]
    pub const fn new(base: Url, http: Client, retry: RetryPolicy) -> Self {
        Self { http, base, retry }
    }

    /// Build the HTTP client and retry policy described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &VaultConfig) -> VaultResult<Self> {
        let http = build_http_client(&config.http).map_err(VaultError::ClientBuild)?;
        Ok(Self::new(
            config.addr.clone(),
            http,
            RetryPolicy::new(config.retry.clone()),
        ))
    }

    /// Resolve `path` against the base address.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidConfig`] if the joined URL is invalid.
    pub fn resolve(&self, path: &str) -> VaultResult<Url> {
        self.base
            .join(path)
            .map_err(|e| VaultError::InvalidConfig(format!("path {path:?}: {e}")))
    }

    /// Perform a request and return the decoded body.
    ///
    /// # Errors
    ///
    /// - [`VaultError::Network`] after the last attempt fails to connect or read
    /// - [`VaultError::HttpStatus`] on the first 4xx/5xx response
    /// - [`VaultError::Serialization`] if a successful body is not a JSON object
    #[instrument(skip(self, method, headers, body), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> VaultResult<JsonObject> {
        let url = self.resolve(path)?;
        let this = self;
        self.retry
            .execute(move || this.send_once(method.clone(), url.clone(), headers, body))
            .await
    }

    async fn send_once(
        &self,
        method: Method,
        url: Url,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> VaultResult<JsonObject> {
        debug!(%url, "Sending vault request");

        let mut request = self.http.request(method, url);
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| VaultError::network(&e))?;
        let status = response.status();

        // An error status is final even when its body cannot be read.
        if status.is_client_error() || status.is_server_error() {
            return Err(VaultError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| VaultError::network(&e))?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "Vault responded");
        decode_body(&bytes)
    }
}

/// Decode a successful response body; blank bodies become an empty object.
///
/// # Errors
///
/// Returns [`VaultError::Serialization`] if the body is not a JSON object.
pub fn decode_body(bytes: &[u8]) -> VaultResult<JsonObject> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}
