//! Vault client request shapes against a mock vault.

use rust_common::RetryConfig;
use secrecy::SecretString;
use std::time::Duration;
use test_utils::MockVault;
use test_utils::fixtures::{
    GET_ENTRY_PATH, LIST_PATH, LOGIN_PATH, UPDATE_PATH, entry_response_with, login_response_without_token,
};
use vault_client::{Credential, SessionToken, VaultApi, VaultClient, VaultConfig, VaultEndpoints, VersionId};
use wiremock::ResponseTemplate;

fn client(vault: &MockVault) -> VaultClient {
    let endpoints = VaultEndpoints::new(LOGIN_PATH, LIST_PATH, GET_ENTRY_PATH, UPDATE_PATH);
    let config = VaultConfig::new(&vault.uri(), endpoints)
        .unwrap()
        .with_retry(RetryConfig::default().with_delay(Duration::from_millis(10)));
    VaultClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_login_posts_password() {
    let vault = MockVault::start().await;
    vault.expect_login(Some("s3cret"), "t1", 1).await;

    let password = SecretString::from("s3cret".to_string());
    let response = client(&vault).login(Some(&password)).await.unwrap();

    assert_eq!(response.into_token().unwrap().expose(), "t1");
}

#[tokio::test]
async fn test_login_without_password_sends_null() {
    let vault = MockVault::start().await;
    vault.expect_login(None, "t1", 1).await;

    let response = client(&vault).login(None).await.unwrap();

    assert!(response.into_token().is_some());
}

#[tokio::test]
async fn test_login_response_without_token_decodes() {
    let vault = MockVault::start().await;
    vault
        .respond_login(
            ResponseTemplate::new(200).set_body_json(login_response_without_token()),
            1,
        )
        .await;

    let response = client(&vault).login(None).await.unwrap();

    assert!(response.into_token().is_none());
}

#[tokio::test]
async fn test_list_uses_list_method_and_token_header() {
    let vault = MockVault::start().await;
    vault.expect_list("t1", &["v2", "v1"], 1).await;

    let response = client(&vault)
        .list_versions(&SessionToken::new("t1"))
        .await
        .unwrap();

    assert_eq!(response.into_versions(), vec![VersionId::from("v2"), VersionId::from("v1")]);
}

#[tokio::test]
async fn test_read_version_appends_version_to_path() {
    let vault = MockVault::start().await;
    vault.expect_entry("t1", "20240601", "svc", "p@ss", 1).await;

    let response = client(&vault)
        .read_version(&SessionToken::new("t1"), &VersionId::from("20240601"))
        .await
        .unwrap();

    let credential = response.into_credential().unwrap();
    assert_eq!(credential.username(), "svc");
    assert_eq!(credential.expose_password(), "p@ss");
}

#[tokio::test]
async fn test_read_version_keeps_extra_fields_out_of_credential() {
    let vault = MockVault::start().await;
    vault
        .respond_entry(
            "t1",
            "v1",
            ResponseTemplate::new(200).set_body_json(entry_response_with(serde_json::json!({
                "username": "svc",
                "password": "p@ss",
                "rotated_by": "ops"
            }))),
            1,
        )
        .await;

    let response = client(&vault)
        .read_version(&SessionToken::new("t1"), &VersionId::from("v1"))
        .await
        .unwrap();

    let body = response.into_credential().unwrap().to_body();
    assert_eq!(body, serde_json::json!({"username": "svc", "password": "p@ss"}));
}

#[tokio::test]
async fn test_write_posts_exact_pair() {
    let vault = MockVault::start().await;
    vault.expect_update("t1", "svc", "p@ss", 1).await;

    let credential = Credential::new("svc", "p@ss").unwrap();
    client(&vault)
        .write_credential(&SessionToken::new("t1"), &credential)
        .await
        .unwrap();

    assert_eq!(vault.received().await, vec![format!("POST {UPDATE_PATH}")]);
}
