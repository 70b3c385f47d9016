//! Configuration types for the ShipStation API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with ShipStation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShipStationConfig`]: The main configuration struct holding all client settings
//! - [`ShipStationConfigBuilder`]: A builder for constructing [`ShipStationConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`AuthorizationToken`]: The derived `Authorization` header value
//! - [`Endpoint`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
//!
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, AuthorizationToken, Endpoint};

use crate::error::ConfigError;

/// Default per-minute request ceiling documented by ShipStation.
pub const DEFAULT_REQUEST_CEILING: u32 = 40;

/// Configuration for the ShipStation API client.
///
/// This struct holds all configuration needed for client operations:
/// API credentials, the endpoint to talk to, and the request ceiling the
/// rate governor starts from.
///
/// Credentials can be supplied either as an [`ApiKey`]/[`ApiSecret`] pair
/// (the authorization token is derived from them) or as a pre-computed
/// [`AuthorizationToken`] for switching between accounts.
///
/// # Thread Safety
///
/// `ShipStationConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret(ApiSecret::new("your-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.authorization().as_ref().starts_with("Basic "));
/// ```
#[derive(Clone, Debug)]
pub struct ShipStationConfig {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    authorization: AuthorizationToken,
    endpoint: Endpoint,
    request_ceiling: u32,
}

impl ShipStationConfig {
    /// Creates a new builder for constructing a `ShipStationConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipstation_api::{ShipStationConfig, ApiKey, ApiSecret};
    ///
    /// let config = ShipStationConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ShipStationConfigBuilder {
        ShipStationConfigBuilder::new()
    }

    /// Returns the API key, if one was configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the API secret, if one was configured.
    #[must_use]
    pub const fn api_secret(&self) -> Option<&ApiSecret> {
        self.api_secret.as_ref()
    }

    /// Returns the authorization token the client starts with.
    ///
    /// This is the explicit token if one was provided, otherwise the token
    /// derived from the API key and secret.
    #[must_use]
    pub const fn authorization(&self) -> &AuthorizationToken {
        &self.authorization
    }

    /// Consumes the config, yielding the credential pieces the client owns.
    pub(crate) fn into_parts(self) -> (Option<ApiKey>, Option<ApiSecret>, AuthorizationToken) {
        (self.api_key, self.api_secret, self.authorization)
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the initial per-minute request ceiling.
    #[must_use]
    pub const fn request_ceiling(&self) -> u32 {
        self.request_ceiling
    }
}

/// Builder for constructing [`ShipStationConfig`] instances.
///
/// Provides a fluent API for setting configuration values, with validation
/// performed when [`build`](Self::build) is called.
#[derive(Debug, Default)]
pub struct ShipStationConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    authorization: Option<AuthorizationToken>,
    endpoint: Option<Endpoint>,
    request_ceiling: Option<u32>,
}

impl ShipStationConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret.
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets an explicit authorization token.
    ///
    /// When set, this token takes precedence over one derived from the API
    /// key and secret.
    #[must_use]
    pub fn authorization(mut self, token: AuthorizationToken) -> Self {
        self.authorization = Some(token);
        self
    }

    /// Sets the API endpoint.
    ///
    /// Defaults to the production endpoint. Override this to point the
    /// client at a mock server in tests.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the initial per-minute request ceiling.
    ///
    /// Defaults to [`DEFAULT_REQUEST_CEILING`]. The true quota is only known
    /// from response headers; this is the optimistic starting value.
    #[must_use]
    pub const fn request_ceiling(mut self, ceiling: u32) -> Self {
        self.request_ceiling = Some(ceiling);
        self
    }

    /// Builds the [`ShipStationConfig`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither an explicit
    /// authorization token nor a complete API key/secret pair was provided.
    pub fn build(self) -> Result<ShipStationConfig, ConfigError> {
        let authorization = match (self.authorization, &self.api_key, &self.api_secret) {
            (Some(token), _, _) => token,
            (None, Some(key), Some(secret)) => AuthorizationToken::derive(key, secret),
            _ => return Err(ConfigError::MissingCredentials),
        };

        Ok(ShipStationConfig {
            api_key: self.api_key,
            api_secret: self.api_secret,
            authorization,
            endpoint: self.endpoint.unwrap_or_default(),
            request_ceiling: self.request_ceiling.unwrap_or(DEFAULT_REQUEST_CEILING),
        })
    }
}
