//! Shared library for cross-cutting concerns in the credential rotation workspace.
//!
//! This crate provides centralized implementations for:
//! - Configuration errors and environment variable parsing
//! - HTTP client configuration and building (timeouts, proxy, TLS)
//! - Retry policies with a fixed delay and a retryable-error predicate
//! - Tracing subscriber initialization

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod http;
pub mod retry;
pub mod tracing_config;

pub use error::ConfigError;
pub use http::{HttpConfig, ProxyConfig, build_http_client};
pub use retry::{RetryConfig, RetryPolicy, Retryable};
pub use tracing_config::{TracingConfig, init_tracing};
