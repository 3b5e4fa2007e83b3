//! Login step.

use crate::reporter::{RotationEvent, RotationReporter};
use secrecy::SecretString;
use vault_client::{SessionToken, VaultApi, VaultError, VaultResult};

/// Exchange the password for a session token.
///
/// # Errors
///
/// Returns [`VaultError::MissingCredential`] if the response has no
/// non-empty `auth.client_token`, or the transport error of the login call.
pub async fn authenticate<V>(
    vault: &V,
    password: Option<&SecretString>,
    reporter: &dyn RotationReporter,
) -> VaultResult<SessionToken>
where
    V: VaultApi + ?Sized,
{
    let login_path = &vault.endpoints().login;

    let token = vault
        .login(password)
        .await?
        .into_token()
        .ok_or_else(|| VaultError::missing_credential(login_path))?;

    reporter.report(&RotationEvent::LoggedIn {
        path: login_path.clone(),
    });
    Ok(token)
}
