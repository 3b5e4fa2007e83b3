//! Vault API trait used by the rotation pipeline.

use crate::config::VaultEndpoints;
use crate::error::VaultResult;
use crate::secrets::{Credential, EntryResponse, ListResponse, LoginResponse, SessionToken, VersionId};
use async_trait::async_trait;
use secrecy::SecretString;

/// The four vault calls a rotation run makes, one per pipeline step.
///
/// Implementations return the decoded responses as-is; deciding whether a
/// response is usable (token present, versions non-empty, fields filled) is
/// left to the caller.
#[async_trait]
pub trait VaultApi: Send + Sync {
    /// Paths the calls are made against.
    fn endpoints(&self) -> &VaultEndpoints;

    /// `POST <login>` with `{"password": ...}`; `None` sends `null`.
    async fn login(&self, password: Option<&SecretString>) -> VaultResult<LoginResponse>;

    /// `LIST <list>` with the session token.
    async fn list_versions(&self, token: &SessionToken) -> VaultResult<ListResponse>;

    /// `GET <get_entry>/<version>` with the session token.
    async fn read_version(&self, token: &SessionToken, version: &VersionId) -> VaultResult<EntryResponse>;

    /// `POST <update>` with the credential as body.
    async fn write_credential(&self, token: &SessionToken, credential: &Credential) -> VaultResult<()>;
}
