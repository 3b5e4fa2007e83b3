//! Credential rotator.
//!
//! Copies the most recent credential version from a source vault path to a
//! destination path in a single sequential run: login, list, fetch, publish.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod reporter;
pub mod rotator;

pub use config::Config;
pub use error::RotatorError;
pub use reporter::{RotationEvent, RotationReporter, TracingReporter};
pub use rotator::{RotationReport, RotationStage, Rotator};
