//! Mock vault server for testing.
//!
//! Wraps a wiremock [`MockServer`] and mounts the login, LIST, read and
//! write endpoints at the paths in [`crate::fixtures`]. Every helper takes an
//! expected call count which wiremock verifies when the server is dropped.

use crate::fixtures::{
    GET_ENTRY_PATH, LIST_PATH, LOGIN_PATH, UPDATE_PATH, entry_response, list_response, login_response,
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Header the rotator sends the session token in.
pub const TOKEN_HEADER: &str = "x-vault-token";

/// Mock vault server.
pub struct MockVault {
    server: MockServer,
}

impl MockVault {
    /// Start a mock vault on a random local port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base address of the mock vault.
    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Login accepting `password` (or `null`) and returning `token`.
    pub async fn expect_login(&self, password: Option<&str>, token: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .and(body_json(json!({ "password": password })))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_response(token)))
            .expect(times)
            .named("login")
            .mount(&self.server)
            .await;
    }

    /// Login answering with an arbitrary response.
    pub async fn respond_login(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(response)
            .expect(times)
            .named("login")
            .mount(&self.server)
            .await;
    }

    /// LIST authorized by `token` returning `keys`.
    pub async fn expect_list(&self, token: &str, keys: &[&str], times: u64) {
        self.respond_list(
            token,
            ResponseTemplate::new(200).set_body_json(list_response(keys)),
            times,
        )
        .await;
    }

    /// LIST authorized by `token` answering with an arbitrary response.
    pub async fn respond_list(&self, token: &str, response: ResponseTemplate, times: u64) {
        Mock::given(method("LIST"))
            .and(path(LIST_PATH))
            .and(header(TOKEN_HEADER, token))
            .and(header("content-type", "application/json"))
            .respond_with(response)
            .expect(times)
            .named("list")
            .mount(&self.server)
            .await;
    }

    /// Read of `version` authorized by `token` returning the pair.
    pub async fn expect_entry(&self, token: &str, version: &str, username: &str, password: &str, times: u64) {
        self.respond_entry(
            token,
            version,
            ResponseTemplate::new(200).set_body_json(entry_response(username, password)),
            times,
        )
        .await;
    }

    /// Read of `version` authorized by `token` answering with an arbitrary response.
    pub async fn respond_entry(&self, token: &str, version: &str, response: ResponseTemplate, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("{GET_ENTRY_PATH}/{version}")))
            .and(header(TOKEN_HEADER, token))
            .respond_with(response)
            .expect(times)
            .named("get_entry")
            .mount(&self.server)
            .await;
    }

    /// Write of exactly `{username, password}` authorized by `token`.
    pub async fn expect_update(&self, token: &str, username: &str, password: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(UPDATE_PATH))
            .and(header(TOKEN_HEADER, token))
            .and(body_json(json!({ "username": username, "password": password })))
            .respond_with(ResponseTemplate::new(204))
            .expect(times)
            .named("update")
            .mount(&self.server)
            .await;
    }

    /// Write answering with an arbitrary response.
    pub async fn respond_update(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path(UPDATE_PATH))
            .respond_with(response)
            .expect(times)
            .named("update")
            .mount(&self.server)
            .await;
    }

    /// Assert no write reached the destination path.
    pub async fn expect_no_update(&self) {
        self.respond_update(ResponseTemplate::new(204), 0).await;
    }

    /// `"<METHOD> <path>"` for every request received so far.
    pub async fn received(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }
}

/// Address of a local port with nothing listening on it.
///
/// # Panics
///
/// Panics if no local port can be bound.
#[must_use]
#[allow(clippy::expect_used)]
pub fn unreachable_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
