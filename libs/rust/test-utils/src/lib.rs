//! Shared test utilities for the credential rotation workspace.
//!
//! This crate provides:
//! - Proptest generators for version identifiers and credentials
//! - A wiremock-backed mock vault server
//! - Response fixtures in the vault's JSON shapes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod mocks;

pub use generators::*;
pub use mocks::MockVault;
