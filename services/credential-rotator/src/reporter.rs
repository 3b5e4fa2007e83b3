//! Progress reporting for rotation runs.
//!
//! Pipeline steps never log directly. They hand [`RotationEvent`]s to the
//! [`RotationReporter`] passed into [`crate::Rotator::run`].

use crate::rotator::RotationStage;
use tracing::{error, info};
use vault_client::VersionId;

/// Something that happened during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationEvent {
    /// Login returned a session token
    LoggedIn {
        /// Login path
        path: String,
    },
    /// The latest version was chosen from the listing
    VersionSelected {
        /// Chosen version
        version: VersionId,
        /// Number of versions listed
        candidates: usize,
    },
    /// The credential for the chosen version was read
    CredentialFetched {
        /// Version read
        version: VersionId,
        /// Username of the credential
        username: String,
    },
    /// The credential was written to the destination
    Published {
        /// Destination path
        path: String,
        /// Username written
        username: String,
    },
    /// The run stopped
    Failed {
        /// Last stage completed
        stage: RotationStage,
        /// Human-readable cause
        message: String,
    },
}

/// Receives the events of a run.
pub trait RotationReporter: Send + Sync {
    /// Record one event.
    fn report(&self, event: &RotationEvent);
}

/// Reporter emitting one tracing event per [`RotationEvent`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl RotationReporter for TracingReporter {
    fn report(&self, event: &RotationEvent) {
        match event {
            RotationEvent::LoggedIn { path } => {
                info!(step = "login", %path, "Logged into vault");
            }
            RotationEvent::VersionSelected { version, candidates } => {
                info!(step = "list", %version, candidates, "Selected latest credential version");
            }
            RotationEvent::CredentialFetched { version, username } => {
                info!(step = "fetch", %version, %username, "Retrieved credential");
            }
            RotationEvent::Published { path, username } => {
                info!(step = "publish", %path, %username, "Updated destination vault entry");
            }
            RotationEvent::Failed { stage, message } => {
                error!(%stage, error = %message, "Credential rotation failed");
            }
        }
    }
}
