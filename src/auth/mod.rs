//! Authentication module
//!
//! Supports: Bearer token, API key, OAuth2 refresh token
//!
//! The `Authenticator` applies credentials to outgoing requests and caches
//! access tokens obtained through the refresh flow.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_TOKEN_URL};

#[cfg(test)]
mod tests;
