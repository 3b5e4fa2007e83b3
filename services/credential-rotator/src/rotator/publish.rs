//! Destination write step.

use crate::reporter::{RotationEvent, RotationReporter};
use vault_client::{Credential, SessionToken, VaultApi, VaultResult};

/// Write the credential to the destination path.
///
/// The write overwrites whatever the destination holds; nothing is rolled
/// back on failure since the source is never modified.
///
/// # Errors
///
/// Returns the transport error of the write call.
pub async fn publish_credential<V>(
    vault: &V,
    token: &SessionToken,
    credential: &Credential,
    reporter: &dyn RotationReporter,
) -> VaultResult<()>
where
    V: VaultApi + ?Sized,
{
    vault.write_credential(token, credential).await?;

    reporter.report(&RotationEvent::Published {
        path: vault.endpoints().update.clone(),
        username: credential.username().to_string(),
    });
    Ok(())
}
