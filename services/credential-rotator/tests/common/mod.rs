//! Shared helpers for rotator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use credential_rotator::{RotationEvent, RotationReporter};
use rust_common::RetryConfig;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;
use test_utils::MockVault;
use test_utils::fixtures::{
    GET_ENTRY_PATH, LIST_PATH, LOGIN_PATH, UPDATE_PATH, entry_response, list_response, login_response,
};
use vault_client::secrets::{EntryResponse, ListResponse, LoginResponse};
use vault_client::{
    Credential, SessionToken, VaultApi, VaultClient, VaultConfig, VaultEndpoints, VaultError, VaultResult,
    VersionId,
};

/// Endpoints matching the mock vault fixtures.
pub fn endpoints() -> VaultEndpoints {
    VaultEndpoints::new(LOGIN_PATH, LIST_PATH, GET_ENTRY_PATH, UPDATE_PATH)
}

/// Real client pointed at a mock vault, with a short retry delay.
pub fn client_for(vault: &MockVault) -> VaultClient {
    client_at(&vault.uri())
}

/// Real client pointed at `uri`, with a short retry delay.
pub fn client_at(uri: &str) -> VaultClient {
    let config = VaultConfig::new(uri, endpoints())
        .unwrap()
        .with_retry(RetryConfig::default().with_delay(Duration::from_millis(20)));
    VaultClient::new(&config).unwrap()
}

/// Reporter keeping every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<RotationEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<RotationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RotationReporter for RecordingReporter {
    fn report(&self, event: &RotationEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Scripted answer of a fake vault call.
pub enum Reply {
    /// Decode this body
    Json(Value),
    /// Fail with this error
    Error(fn() -> VaultError),
}

/// A vault call as the fake received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login { password: Option<String> },
    List { token: String },
    Read { token: String, version: String },
    Write { token: String, username: String, password: String },
}

/// In-memory vault answering each call with a scripted reply.
pub struct FakeVault {
    endpoints: VaultEndpoints,
    login: Reply,
    list: Reply,
    entry: Reply,
    update: Reply,
    calls: Mutex<Vec<Call>>,
}

impl FakeVault {
    /// A vault where every step succeeds.
    pub fn happy(token: &str, keys: &[&str], username: &str, password: &str) -> Self {
        Self {
            endpoints: endpoints(),
            login: Reply::Json(login_response(token)),
            list: Reply::Json(list_response(keys)),
            entry: Reply::Json(entry_response(username, password)),
            update: Reply::Json(json!({})),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_login(mut self, reply: Reply) -> Self {
        self.login = reply;
        self
    }

    pub fn with_list(mut self, reply: Reply) -> Self {
        self.list = reply;
        self
    }

    pub fn with_entry(mut self, reply: Reply) -> Self {
        self.entry = reply;
        self
    }

    pub fn with_update(mut self, reply: Reply) -> Self {
        self.update = reply;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Write { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer<T: serde::de::DeserializeOwned>(reply: &Reply) -> VaultResult<T> {
        match reply {
            Reply::Json(body) => Ok(serde_json::from_value(body.clone())?),
            Reply::Error(make) => Err(make()),
        }
    }
}

#[async_trait]
impl VaultApi for FakeVault {
    fn endpoints(&self) -> &VaultEndpoints {
        &self.endpoints
    }

    async fn login(&self, password: Option<&SecretString>) -> VaultResult<LoginResponse> {
        self.record(Call::Login {
            password: password.map(|p| p.expose_secret().to_string()),
        });
        Self::answer(&self.login)
    }

    async fn list_versions(&self, token: &SessionToken) -> VaultResult<ListResponse> {
        self.record(Call::List {
            token: token.expose().to_string(),
        });
        Self::answer(&self.list)
    }

    async fn read_version(&self, token: &SessionToken, version: &VersionId) -> VaultResult<EntryResponse> {
        self.record(Call::Read {
            token: token.expose().to_string(),
            version: version.to_string(),
        });
        Self::answer(&self.entry)
    }

    async fn write_credential(&self, token: &SessionToken, credential: &Credential) -> VaultResult<()> {
        self.record(Call::Write {
            token: token.expose().to_string(),
            username: credential.username().to_string(),
            password: credential.expose_password().to_string(),
        });
        Self::answer::<Value>(&self.update).map(|_| ())
    }
}
