//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt;

use crate::error::ConfigError;

/// A validated ShipStation API key.
///
/// This newtype ensures the API key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use shipstation_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated ShipStation API secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use shipstation_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A ShipStation authorization token.
///
/// The token is the full value of the `Authorization` header sent with every
/// request: the string `"{api key}:{api secret}"` encoded with base64 and
/// prefixed with `Basic `. It is derived deterministically from an
/// [`ApiKey`]/[`ApiSecret`] pair via [`AuthorizationToken::derive`], or
/// constructed directly from a previously computed value for fast switching
/// between accounts.
///
/// # Security
///
/// The `Debug` implementation masks the token value, since it embeds the
/// API secret.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ApiKey, ApiSecret, AuthorizationToken};
///
/// let key = ApiKey::new("key").unwrap();
/// let secret = ApiSecret::new("secret").unwrap();
///
/// let derived = AuthorizationToken::derive(&key, &secret);
/// let explicit = AuthorizationToken::new(derived.as_ref()).unwrap();
/// assert_eq!(derived, explicit);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// Creates an authorization token from a previously computed header value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthorizationToken`] if the value is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthorizationToken);
        }
        Ok(Self(token))
    }

    /// Derives the authorization token from an API key and secret.
    ///
    /// The derivation is deterministic: the same key/secret pair always
    /// produces the same token.
    #[must_use]
    pub fn derive(key: &ApiKey, secret: &ApiSecret) -> Self {
        let credentials = format!("{}:{}", key.as_ref(), secret.as_ref());
        Self(format!("Basic {}", BASE64.encode(credentials)))
    }
}

impl AsRef<str> for AuthorizationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationToken(*****)")
    }
}

/// A validated ShipStation API endpoint.
///
/// This newtype validates that the endpoint has an http or https scheme and
/// a non-empty host, and normalizes away any trailing slash so paths can be
/// joined unambiguously.
///
/// # Example
///
/// ```rust
/// use shipstation_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://ssapi.shipstation.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://ssapi.shipstation.com");
/// assert_eq!(endpoint.join("Orders"), "https://ssapi.shipstation.com/Orders");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// The production ShipStation API endpoint.
    pub const PRODUCTION: &'static str = "https://ssapi.shipstation.com";

    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no http(s)
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        if rest.is_empty() {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        Ok(Self(url))
    }

    /// Returns the production endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }

    /// Joins a relative path onto the endpoint.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_secret_masks_value_in_debug() {
        let secret = ApiSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ApiSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_authorization_token_derivation_is_deterministic() {
        let key = ApiKey::new("my-key").unwrap();
        let secret = ApiSecret::new("my-secret").unwrap();

        let first = AuthorizationToken::derive(&key, &secret);
        let second = AuthorizationToken::derive(&key, &secret);
        assert_eq!(first, second);
    }

    #[test]
    fn test_authorization_token_is_basic_base64_of_key_colon_secret() {
        let key = ApiKey::new("my-key").unwrap();
        let secret = ApiSecret::new("my-secret").unwrap();

        let token = AuthorizationToken::derive(&key, &secret);
        // base64("my-key:my-secret")
        assert_eq!(token.as_ref(), "Basic bXkta2V5Om15LXNlY3JldA==");
    }

    #[test]
    fn test_authorization_token_masks_value_in_debug() {
        let key = ApiKey::new("my-key").unwrap();
        let secret = ApiSecret::new("my-secret").unwrap();

        let token = AuthorizationToken::derive(&key, &secret);
        assert_eq!(format!("{:?}", token), "AuthorizationToken(*****)");
    }

    #[test]
    fn test_authorization_token_rejects_empty_string() {
        let result = AuthorizationToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAuthorizationToken)));
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let endpoint = Endpoint::new("https://ssapi.shipstation.com/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://ssapi.shipstation.com");
    }

    #[test]
    fn test_endpoint_join() {
        let endpoint = Endpoint::new("http://localhost:8080").unwrap();
        assert_eq!(endpoint.join("Orders"), "http://localhost:8080/Orders");
        assert_eq!(endpoint.join("/Orders"), "http://localhost:8080/Orders");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        // No scheme
        assert!(Endpoint::new("ssapi.shipstation.com").is_err());

        // Empty host
        assert!(Endpoint::new("https://").is_err());

        // Non-http scheme
        assert!(Endpoint::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_default_endpoint_is_production() {
        assert_eq!(Endpoint::default().as_ref(), Endpoint::PRODUCTION);
    }
}
