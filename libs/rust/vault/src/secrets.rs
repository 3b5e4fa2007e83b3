//! Secret value types and vault response structures.

use crate::error::CredentialField;
use reqwest::header::{HeaderValue, InvalidHeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;

/// Bearer token returned by login, sent on every later call.
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Wrap a client token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Token as a sensitive header value.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters not allowed in a header.
    pub fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(self.0.expose_secret())?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Raw token text.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// Label of one historical credential snapshot.
///
/// Ordering is plain string comparison: `"v9"` sorts after `"v10"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionId(String);

impl VersionId {
    /// Wrap a version label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lexicographically greatest label, or `None` for an empty set.
    #[must_use]
    pub fn latest<I>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        ids.into_iter().max()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Username/password pair, both non-empty.
pub struct Credential {
    username: String,
    password: SecretString,
}

impl Credential {
    /// Build a credential, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns the first empty field.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, CredentialField> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(CredentialField::Username);
        }
        if password.is_empty() {
            return Err(CredentialField::Password);
        }
        Ok(Self {
            username,
            password: SecretString::from(password),
        })
    }

    /// Build a credential from a decoded `data` object.
    ///
    /// Absent, empty and non-string fields all count as missing.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn from_data(data: &serde_json::Map<String, serde_json::Value>) -> Result<Self, CredentialField> {
        let field = |name: &str| {
            data.get(name)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
        };
        let username = field("username").ok_or(CredentialField::Username)?;
        let password = field("password").ok_or(CredentialField::Password)?;
        Self::new(username, password)
    }

    /// Username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password text.
    #[must_use]
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }

    /// JSON body written to the destination path.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "username": self.username,
            "password": self.password.expose_secret(),
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Vault login response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// Authentication block
    pub auth: Option<AuthData>,
}

/// Authentication block of a login response.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct AuthData {
    /// Issued client token; kept raw so a non-string value reads as absent
    pub client_token: Option<serde_json::Value>,
}

impl fmt::Debug for AuthData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthData")
            .field("client_token", &self.client_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl LoginResponse {
    /// The client token, if present and non-empty.
    #[must_use]
    pub fn into_token(self) -> Option<SessionToken> {
        self.auth
            .and_then(|auth| auth.client_token)
            .and_then(|token| token.as_str().filter(|t| !t.is_empty()).map(SessionToken::new))
    }
}

/// Vault LIST response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListResponse {
    /// Listing block
    pub data: Option<ListData>,
}

/// Listing block of a LIST response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListData {
    /// Version identifiers under the listed path
    pub keys: Option<Vec<String>>,
}

impl ListResponse {
    /// Version identifiers, empty when the `keys` field is absent.
    #[must_use]
    pub fn into_versions(self) -> Vec<VersionId> {
        self.data
            .and_then(|data| data.keys)
            .unwrap_or_default()
            .into_iter()
            .map(VersionId::new)
            .collect()
    }
}

/// Vault read response for a single version.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct EntryResponse {
    /// Stored key/value data
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

impl fmt::Debug for EntryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Option<Vec<&String>> = self.data.as_ref().map(|d| d.keys().collect());
        f.debug_struct("EntryResponse").field("data_keys", &keys).finish()
    }
}

impl EntryResponse {
    /// Extract the credential.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn into_credential(self) -> Result<Credential, CredentialField> {
        Credential::from_data(&self.data.unwrap_or_default())
    }
}
