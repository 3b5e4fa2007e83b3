//! Vault response fixtures.
//!
//! Bodies follow the shapes vault returns for the login, LIST and read
//! endpoints, including fields the rotator ignores.

use serde_json::{Value, json};

/// Login path used by the mock vault.
pub const LOGIN_PATH: &str = "/v1/auth/userpass/login/rotator";
/// Version listing path used by the mock vault.
pub const LIST_PATH: &str = "/v1/secret/metadata/service-users/app";
/// Retrieval base path used by the mock vault.
pub const GET_ENTRY_PATH: &str = "/v1/secret/service-users/app";
/// Destination path used by the mock vault.
pub const UPDATE_PATH: &str = "/v1/secret/consumers/app";

/// Successful login body carrying `token`.
#[must_use]
pub fn login_response(token: &str) -> Value {
    json!({
        "request_id": "8c0b2c5e-0f1e-4d6b-9a41-2f4f0c1d7a11",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": null,
        "auth": {
            "client_token": token,
            "accessor": "0e9e354a-520f-df04-6867-ee81cae3d42d",
            "policies": ["default", "rotator"],
            "token_policies": ["default", "rotator"],
            "lease_duration": 2_764_800,
            "renewable": true
        }
    })
}

/// Login body without an `auth.client_token`.
#[must_use]
pub fn login_response_without_token() -> Value {
    json!({
        "request_id": "8c0b2c5e-0f1e-4d6b-9a41-2f4f0c1d7a11",
        "auth": {
            "accessor": "0e9e354a-520f-df04-6867-ee81cae3d42d",
            "policies": ["default"]
        }
    })
}

/// LIST body with the given version identifiers.
#[must_use]
pub fn list_response(keys: &[&str]) -> Value {
    json!({
        "request_id": "1f0d6a2b-2a3c-4b9e-8e0a-5d1c7b3e9f20",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": { "keys": keys }
    })
}

/// Read body for a stored username/password pair.
#[must_use]
pub fn entry_response(username: &str, password: &str) -> Value {
    entry_response_with(json!({ "username": username, "password": password }))
}

/// Read body wrapping arbitrary `data`.
#[must_use]
pub fn entry_response_with(data: Value) -> Value {
    json!({
        "request_id": "5a7e9c1d-3b2f-4e6a-8d0c-9f1b2a3c4d5e",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 2_764_800,
        "data": data
    })
}

/// Vault error body.
#[must_use]
pub fn error_response(message: &str) -> Value {
    json!({ "errors": [message] })
}
