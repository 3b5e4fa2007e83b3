//! Credential retrieval step.

use crate::reporter::{RotationEvent, RotationReporter};
use vault_client::{Credential, SessionToken, VaultApi, VaultError, VaultResult, VersionId};

/// Read `version` and extract its username/password pair.
///
/// # Errors
///
/// Returns [`VaultError::IncompleteCredential`] if either field is absent,
/// empty or not a string, or the transport error of the read call.
pub async fn fetch_credential<V>(
    vault: &V,
    token: &SessionToken,
    version: &VersionId,
    reporter: &dyn RotationReporter,
) -> VaultResult<Credential>
where
    V: VaultApi + ?Sized,
{
    let credential = vault
        .read_version(token, version)
        .await?
        .into_credential()
        .map_err(|field| VaultError::incomplete(vault.endpoints().entry_path(version.as_str()), field))?;

    reporter.report(&RotationEvent::CredentialFetched {
        version: version.clone(),
        username: credential.username().to_string(),
    });
    Ok(credential)
}
