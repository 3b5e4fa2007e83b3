//! The rotation pipeline.
//!
//! A run logs in, picks the latest source version, reads its credential and
//! writes it to the destination. Steps run strictly in that order; the first
//! failure ends the run and later steps are never attempted. Retrying is left
//! entirely to the vault transport.

mod authenticate;
mod fetch;
mod locate;
mod publish;

pub use authenticate::authenticate;
pub use fetch::fetch_credential;
pub use locate::{locate_latest, select_latest};
pub use publish::publish_credential;

use crate::error::RotatorError;
use crate::reporter::{RotationEvent, RotationReporter};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use std::fmt;
use tracing::{Instrument, info_span};
use uuid::Uuid;
use vault_client::{VaultApi, VaultError, VersionId};

/// Progress of a run. Transitions only move forward; a failed run ends
/// with [`RotatorError::Rotation`] carrying the last stage reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RotationStage {
    /// Nothing done yet
    Start,
    /// Session token obtained
    Authenticated,
    /// Latest version chosen
    VersionSelected,
    /// Credential read and validated
    CredentialFetched,
    /// Credential written to the destination
    Published,
}

impl fmt::Display for RotationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Authenticated => "authenticated",
            Self::VersionSelected => "version selected",
            Self::CredentialFetched => "credential fetched",
            Self::Published => "published",
        })
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationReport {
    /// Identifier of the run
    pub run_id: Uuid,
    /// Version that was propagated
    pub version: VersionId,
    /// Username that was written
    pub username: String,
    /// Final stage, always [`RotationStage::Published`]
    pub stage: RotationStage,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the write completed
    pub finished_at: DateTime<Utc>,
}

/// Runs the rotation pipeline against one vault.
pub struct Rotator<V> {
    vault: V,
    password: Option<SecretString>,
}

impl<V: VaultApi> Rotator<V> {
    /// Create a rotator logging in with `password`.
    #[must_use]
    pub const fn new(vault: V, password: Option<SecretString>) -> Self {
        Self { vault, password }
    }

    /// The vault this rotator talks to.
    #[must_use]
    pub const fn vault(&self) -> &V {
        &self.vault
    }

    /// Execute one run.
    ///
    /// # Errors
    ///
    /// Returns [`RotatorError::Rotation`] carrying the last completed stage
    /// and the failing step's error. Nothing is written on failure.
    pub async fn run(&self, reporter: &dyn RotationReporter) -> Result<RotationReport, RotatorError> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let mut stage = RotationStage::Start;

        let span = info_span!("rotation", %run_id);
        let outcome = self
            .execute(&mut stage, reporter)
            .instrument(span.clone())
            .await;

        match outcome {
            Ok((version, username)) => Ok(RotationReport {
                run_id,
                version,
                username,
                stage,
                started_at,
                finished_at: Utc::now(),
            }),
            Err(source) => {
                span.in_scope(|| {
                    reporter.report(&RotationEvent::Failed {
                        stage,
                        message: source.to_string(),
                    });
                });
                Err(RotatorError::Rotation { stage, source })
            }
        }
    }

    async fn execute(
        &self,
        stage: &mut RotationStage,
        reporter: &dyn RotationReporter,
    ) -> Result<(VersionId, String), VaultError> {
        let token = authenticate(&self.vault, self.password.as_ref(), reporter).await?;
        *stage = RotationStage::Authenticated;

        let version = locate_latest(&self.vault, &token, reporter).await?;
        *stage = RotationStage::VersionSelected;

        let credential = fetch_credential(&self.vault, &token, &version, reporter).await?;
        *stage = RotationStage::CredentialFetched;

        publish_credential(&self.vault, &token, &credential, reporter).await?;
        *stage = RotationStage::Published;

        Ok((version, credential.username().to_string()))
    }
}
