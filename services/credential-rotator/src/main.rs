//! Credential rotator - one-shot credential propagation between vault paths.
//!
//! Configuration comes from the environment (and `.env`). The process exits
//! with 0 on success or a code identifying the failure kind.

use std::process::ExitCode;

use credential_rotator::{Config, Rotator, RotatorError, TracingReporter};
use rust_common::{TracingConfig, init_tracing};
use tracing::{error, info, warn};
use vault_client::VaultClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&TracingConfig::default());
            let err = RotatorError::from(e);
            error!(error = %err, "Invalid configuration");
            return ExitCode::from(&err);
        }
    };

    init_tracing(&config.tracing);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(err, RotatorError::Setup(_)) {
                error!(error = %err, "Startup failed");
            }
            ExitCode::from(&err)
        }
    }
}

async fn run(config: Config) -> Result<(), RotatorError> {
    let proxy = config
        .vault
        .http
        .proxy
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.url());
    info!(
        version = env!("CARGO_PKG_VERSION"),
        vault = %config.vault.addr,
        profile = %config.profile,
        %proxy,
        "Starting credential rotation"
    );

    if config.password.is_none() {
        warn!("VAULT_PASSWORD is not set; login will be attempted without a password");
    }

    let client = VaultClient::new(&config.vault)?;
    let rotator = Rotator::new(client, config.password);

    let report = rotator.run(&TracingReporter).await?;

    info!(
        run_id = %report.run_id,
        version = %report.version,
        username = %report.username,
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "Credential rotation complete"
    );
    Ok(())
}
