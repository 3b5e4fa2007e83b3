//! Version selection step.

use crate::reporter::{RotationEvent, RotationReporter};
use vault_client::{SessionToken, VaultApi, VaultError, VaultResult, VersionId};

/// Pick the latest version: the greatest label by plain string comparison.
///
/// Labels are never parsed as numbers or timestamps, so `"v9"` wins over
/// `"v10"`.
#[must_use]
pub fn select_latest(versions: Vec<VersionId>) -> Option<VersionId> {
    VersionId::latest(versions)
}

/// List the source versions and select the latest.
///
/// # Errors
///
/// Returns [`VaultError::NoVersionsFound`] if the listing is empty or has
/// no `keys` field, or the transport error of the list call.
pub async fn locate_latest<V>(
    vault: &V,
    token: &SessionToken,
    reporter: &dyn RotationReporter,
) -> VaultResult<VersionId>
where
    V: VaultApi + ?Sized,
{
    let versions = vault.list_versions(token).await?.into_versions();
    let candidates = versions.len();

    let latest = select_latest(versions).ok_or_else(|| VaultError::no_versions(&vault.endpoints().list))?;

    reporter.report(&RotationEvent::VersionSelected {
        version: latest.clone(),
        candidates,
    });
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(labels: &[&str]) -> Vec<VersionId> {
        labels.iter().copied().map(VersionId::from).collect()
    }

    #[test]
    fn test_select_latest_timestamps() {
        let latest = select_latest(ids(&["20230101", "20240601", "20231231"]));
        assert_eq!(latest, Some(VersionId::from("20240601")));
    }

    #[test]
    fn test_select_latest_is_not_numeric() {
        assert_eq!(select_latest(ids(&["v10", "v9"])), Some(VersionId::from("v9")));
        assert_eq!(select_latest(ids(&["B", "a"])), Some(VersionId::from("a")));
    }

    #[test]
    fn test_select_latest_empty() {
        assert_eq!(select_latest(Vec::new()), None);
    }
}
