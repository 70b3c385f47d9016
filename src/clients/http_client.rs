//! HTTP transport for ShipStation API communication.
//!
//! This module provides the [`HttpClient`] type, a thin transport layer
//! that performs exactly one HTTP request per call and returns the parsed
//! response. It has no retry logic and no rate-limit awareness; both
//! concerns live above it, in the rate governor and the client's response
//! normalization.

use std::collections::HashMap;

use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AuthorizationToken, Endpoint};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for making requests to the ShipStation API.
///
/// The transport handles:
/// - URL construction from the configured endpoint
/// - Default headers including User-Agent and Accept
/// - Per-request `Authorization` header injection
/// - Response header normalization (lowercased names)
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The API endpoint requests are issued against.
    endpoint: Endpoint,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport for the given endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("ShipStation API Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            default_headers,
        }
    }

    /// Returns the endpoint for this transport.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one HTTP request to the ShipStation API.
    ///
    /// The request is issued exactly once: no retries, no backoff. A
    /// non-200 status is not an error at this layer; it comes back as an
    /// [`HttpResponse`] for the caller to normalize.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] when no structured response could be
    /// produced at all (connection failure, request build failure, or a
    /// failure reading the response body).
    pub async fn send(
        &self,
        request: &HttpRequest,
        authorization: &AuthorizationToken,
    ) -> Result<HttpResponse, reqwest::Error> {
        let url = self.endpoint.join(&request.path);

        tracing::debug!(method = %request.http_method, path = %request.path, "dispatching request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header("Authorization", authorization.as_ref());

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            if let Some(body_type) = request.body_type {
                req_builder = req_builder.header("Content-Type", body_type.as_content_type());
            }
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let raw_body = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(code, headers, raw_body))
    }

    /// Parses response headers into a map with lowercased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_construction() {
        let transport = HttpClient::new(Endpoint::production());
        assert_eq!(transport.endpoint().as_ref(), Endpoint::PRODUCTION);
    }

    #[test]
    fn test_user_agent_header_format() {
        let transport = HttpClient::new(Endpoint::production());

        let user_agent = transport.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("ShipStation API Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let transport = HttpClient::new(Endpoint::production());

        assert_eq!(
            transport.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
