//! Centralized configuration for the credential rotator.
//!
//! All configuration is loaded from environment variables and validated
//! at startup, before any request reaches the vault.

use rust_common::env::Env;
use rust_common::{ConfigError, HttpConfig, ProxyConfig, RetryConfig, TracingConfig};
use secrecy::SecretString;
use std::time::Duration;
use vault_client::{VaultConfig, VaultEndpoints};

/// Profile under which no proxy is configured.
pub const LOCAL_PROFILE: &str = "local";

const DEFAULT_VAULT_ADDR: &str = "https://127.0.0.1:8200";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Credential rotator configuration.
#[derive(Debug)]
pub struct Config {
    /// Vault address, paths, HTTP and retry settings
    pub vault: VaultConfig,
    /// Login secret; `None` when `VAULT_PASSWORD` is unset
    pub password: Option<SecretString>,
    /// Deployment profile
    pub profile: String,
    /// Log output settings
    pub tracing: TracingConfig,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(&Env::process())
    }

    /// Load configuration from an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_source(env: &Env) -> Result<Self, ConfigError> {
        let endpoints = VaultEndpoints::new(
            env.require("VAULT_LOGIN_PATH")?,
            env.require("VAULT_LIST_PATH")?,
            env.require("VAULT_GET_ENTRY_PATH")?,
            env.require("VAULT_UPDATE_PATH")?,
        );

        let profile = env.optional("ROTATOR_PROFILE").unwrap_or_else(|| "default".to_string());

        let retry = RetryConfig::default()
            .with_max_attempts(env.parse_or("VAULT_RETRY_ATTEMPTS", 3)?)
            .with_delay(Duration::from_secs(env.parse_or("VAULT_RETRY_DELAY_SECS", 2)?));

        let mut http = HttpConfig::default()
            .with_user_agent(USER_AGENT)
            .with_connect_timeout(Duration::from_millis(env.parse_or("HTTP_CONNECT_TIMEOUT_MS", 5_000)?))
            .with_timeout(Duration::from_millis(env.parse_or("HTTP_TIMEOUT_MS", 20_000)?))
            .with_accept_invalid_certs(env.parse_or("VAULT_SKIP_TLS_VERIFY", false)?);
        if !profile.eq_ignore_ascii_case(LOCAL_PROFILE) {
            if let Some(proxy) = parse_proxy(env)? {
                http = http.with_proxy(proxy);
            }
        }

        let addr = env.optional("VAULT_ADDR").unwrap_or_else(|| DEFAULT_VAULT_ADDR.to_string());
        let vault = VaultConfig::new(&addr, endpoints)
            .map_err(|e| ConfigError::invalid("VAULT_ADDR", e.to_string()))?
            .with_http(http)
            .with_retry(retry);

        let tracing = TracingConfig::default()
            .with_service_name(env!("CARGO_PKG_NAME"))
            .with_log_level(env.optional("LOG_LEVEL").unwrap_or_else(|| "info".to_string()))
            .with_json_output(env.parse_or("LOG_JSON", false)?);

        Ok(Self {
            vault,
            password: env.optional("VAULT_PASSWORD").map(SecretString::from),
            profile,
            tracing,
        })
    }
}

/// Parse proxy settings; a host without a port is an error.
fn parse_proxy(env: &Env) -> Result<Option<ProxyConfig>, ConfigError> {
    match env.optional("HTTP_PROXY_HOST") {
        Some(host) => {
            let port = env
                .parse_optional("HTTP_PROXY_PORT")?
                .ok_or_else(|| ConfigError::missing("HTTP_PROXY_PORT"))?;
            Ok(Some(ProxyConfig::new(host, port)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn base_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("VAULT_LOGIN_PATH", "/v1/auth/userpass/login/rotator"),
            ("VAULT_LIST_PATH", "/v1/secret/metadata/app"),
            ("VAULT_GET_ENTRY_PATH", "/v1/secret/app"),
            ("VAULT_UPDATE_PATH", "/v1/secret/consumer"),
        ]
    }

    fn with(extra: &[(&'static str, &'static str)]) -> Env {
        let mut vars = base_vars();
        vars.extend_from_slice(extra);
        Env::from_pairs(vars)
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_source(&with(&[])).unwrap();

        assert_eq!(config.vault.addr.as_str(), "https://127.0.0.1:8200/");
        assert_eq!(config.vault.endpoints.login, "/v1/auth/userpass/login/rotator");
        assert_eq!(config.vault.retry.max_attempts, 3);
        assert_eq!(config.vault.retry.delay, Duration::from_secs(2));
        assert_eq!(config.vault.http.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.vault.http.timeout, Duration::from_secs(20));
        assert!(config.vault.http.proxy.is_none());
        assert_eq!(config.vault.http.user_agent, USER_AGENT);
        assert!(config.vault.http.user_agent.starts_with("credential-rotator/"));
        assert!(config.password.is_none());
        assert_eq!(config.profile, "default");
        assert_eq!(config.tracing.log_level, "info");
        assert!(!config.tracing.json_output);
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let env = Env::from_pairs(base_vars().into_iter().filter(|(k, _)| *k != "VAULT_LIST_PATH"));
        assert_eq!(
            Config::from_source(&env).unwrap_err(),
            ConfigError::missing("VAULT_LIST_PATH")
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(&with(&[
            ("VAULT_ADDR", "https://vault.internal:8200"),
            ("VAULT_PASSWORD", "s3cret"),
            ("VAULT_RETRY_ATTEMPTS", "5"),
            ("VAULT_RETRY_DELAY_SECS", "1"),
            ("LOG_JSON", "true"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.vault.addr.host_str(), Some("vault.internal"));
        assert_eq!(config.password.unwrap().expose_secret(), "s3cret");
        assert_eq!(config.vault.retry.max_attempts, 5);
        assert_eq!(config.vault.retry.delay, Duration::from_secs(1));
        assert!(config.tracing.json_output);
        assert_eq!(config.tracing.log_level, "debug");
    }

    #[test]
    fn test_proxy_skipped_for_local_profile() {
        let proxy = [("HTTP_PROXY_HOST", "proxy.internal"), ("HTTP_PROXY_PORT", "3128")];

        let config = Config::from_source(&with(&proxy)).unwrap();
        assert_eq!(
            config.vault.http.proxy,
            Some(ProxyConfig::new("proxy.internal", 3128))
        );

        let mut local = proxy.to_vec();
        local.push(("ROTATOR_PROFILE", "local"));
        let config = Config::from_source(&with(&local)).unwrap();
        assert!(config.vault.http.proxy.is_none());

        let mut upper = proxy.to_vec();
        upper.push(("ROTATOR_PROFILE", "LOCAL"));
        let config = Config::from_source(&with(&upper)).unwrap();
        assert!(config.vault.http.proxy.is_none());
    }

    #[test]
    fn test_proxy_host_requires_port() {
        let err = Config::from_source(&with(&[("HTTP_PROXY_HOST", "proxy.internal")])).unwrap_err();
        assert_eq!(err, ConfigError::missing("HTTP_PROXY_PORT"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_source(&with(&[("VAULT_ADDR", "not a url")])),
            Err(ConfigError::Invalid { ref name, .. }) if name == "VAULT_ADDR"
        ));
        assert!(matches!(
            Config::from_source(&with(&[("VAULT_RETRY_ATTEMPTS", "three")])),
            Err(ConfigError::Invalid { ref name, .. }) if name == "VAULT_RETRY_ATTEMPTS"
        ));
    }
}
