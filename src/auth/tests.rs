//! Tests for the auth module

use super::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn refresh_config(server: &MockServer) -> AuthConfig {
    AuthConfig::Oauth2Refresh {
        token_url: format!("{}/token", server.uri()),
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "my-refresh-token".to_string(),
    }
}

#[tokio::test]
async fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v1/jobs");

    let built = auth.apply(req).await.unwrap().build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
    assert_eq!(built.url().query(), None);
}

#[tokio::test]
async fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::bearer("my-token"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v1/jobs");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
}

#[tokio::test]
async fn test_api_key_query() {
    let auth = Authenticator::new(AuthConfig::api_key("key-123"));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v1/jobs?pageSize=10");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(built.url().query(), Some("pageSize=10&key=key-123"));
    assert!(built.headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_oauth2_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=my-refresh-token"))
        .and(body_string_contains("client_id=client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "refreshed-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(refresh_config(&mock_server));

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v1/jobs");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer refreshed-token"
    );
}

#[tokio::test]
async fn test_token_caching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1) // Only one token request
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(refresh_config(&mock_server));
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let req = client.get("https://example.com/v1/jobs");
        let built = auth.apply(req).await.unwrap().build().unwrap();
        assert_eq!(
            built.headers().get("Authorization").unwrap(),
            "Bearer cached-token"
        );
    }
}

#[tokio::test]
async fn test_short_lived_token_is_refreshed() {
    let mock_server = MockServer::start().await;

    // Inside the 30 second buffer, so every use refreshes
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short-token",
            "expires_in": 5
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(refresh_config(&mock_server));
    let client = reqwest::Client::new();

    let _ = auth.apply(client.get("https://example.com/a")).await.unwrap();
    let _ = auth.apply(client.get("https://example.com/b")).await.unwrap();
}

#[tokio::test]
async fn test_clear_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2) // Expect 2 calls due to cache clear
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(refresh_config(&mock_server));
    let client = reqwest::Client::new();

    let _ = auth.apply(client.get("https://example.com/a")).await.unwrap();
    auth.clear_cache().await;
    let _ = auth.apply(client.get("https://example.com/b")).await.unwrap();
}

#[tokio::test]
async fn test_oauth2_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Token has been expired or revoked."
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(refresh_config(&mock_server));

    let client = reqwest::Client::new();
    let result = auth.apply(client.get("https://example.com/v1/jobs")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, crate::Error::TokenRefresh { .. }));
    assert!(err.to_string().contains("400"));
    assert!(err.to_string().contains("invalid_grant"));
}

#[test]
fn test_debug_hides_credentials() {
    let auth = Authenticator::new(AuthConfig::bearer("super-secret"));
    let debug = format!("{auth:?}");
    assert!(debug.contains("bearer"));
    assert!(!debug.contains("super-secret"));
}
