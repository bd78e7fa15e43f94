//! Auth configuration types
//!
//! Credentials come from the service configuration. Access tokens obtained
//! through a refresh flow are cached with their expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Google's OAuth2 token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Pre-issued OAuth2 access token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// API key, sent as the `key` query parameter
    ApiKey {
        /// The API key value
        key: String,
    },

    /// OAuth2 refresh token flow
    Oauth2Refresh {
        /// Token endpoint URL
        #[serde(default = "default_token_url")]
        token_url: String,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// Refresh token
        refresh_token: String,
    },
}

impl AuthConfig {
    /// Bearer auth with a fixed token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// API key auth
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey { key: key.into() }
    }

    /// Check if any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_not_expired() {
        let token = CachedToken::expires_in("test".to_string(), 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_cached_token_within_buffer_is_expired() {
        let token = CachedToken::expires_in("test".to_string(), 10);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("test".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(config.is_none());
    }

    #[test]
    fn test_auth_config_yaml() {
        let config: AuthConfig = serde_yaml::from_str(
            "type: oauth2_refresh\nclient_id: id\nclient_secret: secret\nrefresh_token: rt\n",
        )
        .unwrap();

        assert_eq!(
            config,
            AuthConfig::Oauth2Refresh {
                token_url: DEFAULT_TOKEN_URL.to_string(),
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                refresh_token: "rt".to_string(),
            }
        );

        let config: AuthConfig = serde_yaml::from_str("type: api_key\nkey: abc\n").unwrap();
        assert_eq!(config, AuthConfig::api_key("abc"));
    }
}
