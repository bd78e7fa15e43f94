//! Authenticator implementation
//!
//! Handles applying authentication to requests and managing token refresh.

use super::types::{AuthConfig, CachedToken};
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Query parameter Google APIs read the API key from
const API_KEY_PARAM: &str = "key";

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Cached access token for the refresh flow
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create an authenticator with a custom HTTP client
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),
            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),
            AuthConfig::ApiKey { key } => Ok(req.query(&[(API_KEY_PARAM, key)])),
            AuthConfig::Oauth2Refresh { .. } => {
                let token = self.get_or_refresh_token().await?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    /// Get a valid token, refreshing if necessary
    async fn get_or_refresh_token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_new_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Fetch a new token based on auth type
    async fn fetch_new_token(&self) -> Result<CachedToken> {
        match &self.config {
            AuthConfig::Oauth2Refresh {
                token_url,
                client_id,
                client_secret,
                refresh_token,
            } => {
                self.fetch_oauth2_refresh(token_url, client_id, client_secret, refresh_token)
                    .await
            }
            _ => Err(Error::auth("Token refresh not supported for this auth type")),
        }
    }

    /// Fetch OAuth2 token using refresh token flow
    async fn fetch_oauth2_refresh(
        &self,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<CachedToken> {
        debug!(token_url, "Refreshing OAuth2 access token");

        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
        ];

        let response = self
            .http_client
            .post(token_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenRefresh {
                message: format!("Refresh token request failed with status {status}: {body}"),
            });
        }

        let token_response: TokenResponse = response.json().await.map_err(Error::Http)?;
        Ok(token_response.into_cached_token())
    }

    /// Clear the cached token, forcing a refresh on next use
    pub async fn clear_cache(&self) {
        let mut cached = self.cached_token.write().await;
        *cached = None;
    }

    /// Get the current auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.config {
            AuthConfig::None => "none",
            AuthConfig::Bearer { .. } => "bearer",
            AuthConfig::ApiKey { .. } => "api_key",
            AuthConfig::Oauth2Refresh { .. } => "oauth2_refresh",
        };
        f.debug_struct("Authenticator")
            .field("kind", &kind)
            .finish_non_exhaustive()
    }
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
